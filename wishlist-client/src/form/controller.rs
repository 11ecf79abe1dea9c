//! Action handlers binding the form state to the HTTP client

use shared::{CustomerCountQuery, WishlistCreate, WishlistQuery, WishlistUpdate};

use crate::http::HttpClient;

use super::state::FormState;

/// Form-sync controller: one method per user action.
///
/// Each action reads the current field text, issues a single request, and
/// folds the outcome back into [`FormState`] through its transition
/// methods. No action retries, and each is awaited to completion before
/// the surface hands over the next trigger.
#[derive(Debug)]
pub struct FormController {
    client: HttpClient,
    state: FormState,
}

impl FormController {
    /// Create a controller over an empty form
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            state: FormState::new(),
        }
    }

    /// Current form state, for the rendering surface
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Mutable access to the field text, for input widgets
    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    /// Create a wishlist from the name/email fields
    pub async fn create(&mut self) {
        let payload = WishlistCreate {
            name: self.state.name.clone(),
            email: self.state.email.clone(),
        };

        tracing::debug!("Creating wishlist {:?}", payload.name);
        match self.client.create(&payload).await {
            Ok(record) => self.state.record_saved(&record),
            Err(err) => self.state.action_failed(err.flash_text()),
        }
    }

    /// Update the wishlist named by the id field from the name/email fields
    pub async fn update(&mut self) {
        let id = self.state.wishlist_id.clone();
        let payload = WishlistUpdate {
            name: self.state.name.clone(),
            email: self.state.email.clone(),
        };

        tracing::debug!("Updating wishlist {}", id);
        match self.client.update(&id, &payload).await {
            Ok(record) => self.state.record_saved(&record),
            Err(err) => self.state.action_failed(err.flash_text()),
        }
    }

    /// Fetch the wishlist named by the id field
    pub async fn retrieve(&mut self) {
        let id = self.state.wishlist_id.clone();

        tracing::debug!("Retrieving wishlist {}", id);
        match self.client.retrieve(&id).await {
            Ok(record) => self.state.record_saved(&record),
            Err(err) => self.state.retrieve_failed(err.flash_text()),
        }
    }

    /// Delete the wishlist named by the id field
    pub async fn delete(&mut self) {
        let id = self.state.wishlist_id.clone();

        tracing::debug!("Deleting wishlist {}", id);
        match self.client.delete(&id).await {
            Ok(()) => self.state.deleted(),
            Err(err) => {
                // The fixed flash hides the cause, so keep it in the log
                tracing::warn!("Delete failed: {}", err);
                self.state.delete_failed();
            }
        }
    }

    /// Search by the name/email fields; blank fields are not sent
    pub async fn search(&mut self) {
        let query = WishlistQuery::from_form(&self.state.name, &self.state.email);

        tracing::debug!("Searching wishlists with {:?}", query);
        match self.client.search(&query).await {
            Ok(records) => self.state.search_finished(records),
            Err(err) => self.state.action_failed(err.flash_text()),
        }
    }

    /// Count wishlists for the customer email field
    pub async fn count(&mut self) {
        let customer_email = self.state.email.clone();
        let query = CustomerCountQuery::from_form(&customer_email);

        tracing::debug!("Counting wishlists for {:?}", customer_email);
        match self.client.count_by_customer(&query).await {
            Ok(count) => self.state.count_finished(&customer_email, count),
            Err(err) => self.state.action_failed(err.flash_text()),
        }
    }

    /// Blank the record fields; no request is made
    pub fn clear(&mut self) {
        self.state.clear_fields();
    }
}
