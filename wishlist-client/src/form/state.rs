//! Form state and its transitions

use shared::Wishlist;

/// Flash text for a successful create/update/retrieve/search
const FLASH_SUCCESS: &str = "Success";

/// Flash text for a successful delete
const FLASH_DELETED: &str = "Wishlist has been deleted!";

/// Fixed flash text for a failed delete; the service message is not surfaced
const FLASH_DELETE_FAILED: &str = "Server error!";

/// The single mutable piece of client-side state behind the form surface.
///
/// Mirrors one wishlist record as raw field text, plus the transient flash
/// line and the transient search-result rows. All writes happen through the
/// transition methods below, one per cell of the action table.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    /// Service-assigned id, kept as typed field text. Empty until the
    /// service assigns one.
    pub wishlist_id: String,
    pub name: String,
    pub email: String,
    /// Single-line status from the last completed action
    pub flash: String,
    /// Rows from the last successful search, in response order
    pub results: Vec<Wishlist>,
}

impl FormState {
    /// Fresh, empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank the record fields. The explicit clear action; also reused by
    /// the transitions that invalidate the fields.
    pub fn clear_fields(&mut self) {
        self.wishlist_id.clear();
        self.name.clear();
        self.email.clear();
    }

    /// A create/update/retrieve returned a record: the form now mirrors it
    pub(crate) fn record_saved(&mut self, record: &Wishlist) {
        self.wishlist_id = record.id.to_string();
        self.name = record.name.clone();
        self.email = record.email.clone();
        self.flash = FLASH_SUCCESS.to_string();
    }

    /// Retrieve failed: the fields no longer describe any service record
    pub(crate) fn retrieve_failed(&mut self, message: String) {
        self.clear_fields();
        self.flash = message;
    }

    /// Delete succeeded: the record is gone
    pub(crate) fn deleted(&mut self) {
        self.clear_fields();
        self.flash = FLASH_DELETED.to_string();
    }

    /// Delete failed: fixed flash, fields untouched
    pub(crate) fn delete_failed(&mut self) {
        self.flash = FLASH_DELETE_FAILED.to_string();
    }

    /// Search succeeded: replace the rows and copy the first one into the
    /// fields. Zero rows leaves the fields as they were.
    pub(crate) fn search_finished(&mut self, records: Vec<Wishlist>) {
        self.results = records;
        if let Some(first) = self.results.first().cloned() {
            self.record_saved(&first);
        } else {
            self.flash = FLASH_SUCCESS.to_string();
        }
    }

    /// Count succeeded
    pub(crate) fn count_finished(&mut self, customer_email: &str, count: usize) {
        self.flash = format!("Customer_email {} has {} wishlists", customer_email, count);
    }

    /// Any other failed action: surface the message, touch nothing else
    pub(crate) fn action_failed(&mut self, message: String) {
        self.flash = message;
    }
}
