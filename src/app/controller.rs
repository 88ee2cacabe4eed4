use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    domain::{User, UserField, UserId},
    remote::{RemoteResult, UserRemote},
};

use super::{
    options::UiOptions,
    pagination::{ScrollMetrics, ScrollSubscription},
    request::{Outcome, Request, SaveOp},
    state::AppState,
};

pub const FETCH_ERROR: &str = "Failed to fetch users";
pub const SAVE_ERROR: &str = "Failed to save user";
pub const DELETE_ERROR: &str = "Failed to delete user";

/// Owns [`AppState`] and decides which remote calls to make.
///
/// Entry points that need the remote return a [`Request`]; the result comes
/// back through [`Controller::settle`]. [`Controller::perform`] does both in
/// one step for callers that can afford to wait.
#[derive(Debug)]
pub struct Controller {
    state: AppState,
    remote: Arc<dyn UserRemote>,
    page_size: u32,
    scroll: ScrollSubscription,
}

impl Controller {
    pub fn new(remote: Arc<dyn UserRemote>, options: &UiOptions) -> Self {
        Self {
            state: AppState::default(),
            remote,
            page_size: options.page_size.max(1),
            scroll: ScrollSubscription::new(options.scroll_threshold),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn remote(&self) -> Arc<dyn UserRemote> {
        Arc::clone(&self.remote)
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Rows below the viewport at which the next page is requested.
    pub fn scroll_threshold(&self) -> usize {
        self.scroll.threshold()
    }

    /// Request the first page. Only the first call does anything.
    pub fn startup(&mut self) -> Option<Request> {
        if self.state.started {
            return None;
        }
        self.state.started = true;
        Some(self.begin_fetch())
    }

    /// Advance to the next page when the viewport nears the end of the
    /// content and nothing is loading.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<Request> {
        if !self.scroll.is_near_bottom(metrics) {
            return None;
        }
        if self.state.loading {
            debug!(page = self.state.page, "scroll ignored while a page is loading");
            return None;
        }
        self.state.page += 1;
        Some(self.begin_fetch())
    }

    pub fn change_field(&mut self, field: UserField, value: String) {
        self.state.form.set_field(field, value);
    }

    /// Validate the draft and describe the save. `None` means there is
    /// nothing to send; the validation messages say why.
    pub fn submit(&mut self) -> Option<Request> {
        if !self.state.form.validate() {
            debug!(
                issues = self.state.form.errors().len(),
                "submit blocked by validation"
            );
            return None;
        }
        let user = self.state.form.user().clone();
        let op = if self.state.editing {
            match user.id.clone() {
                Some(id) => SaveOp::Update { id },
                None => {
                    warn!("draft in edit mode has no id; nothing to update");
                    self.state.error = Some(SAVE_ERROR.to_string());
                    return None;
                }
            }
        } else {
            SaveOp::Create
        };
        Some(Request::Save { op, user })
    }

    /// Load an existing record into the draft for updating.
    pub fn edit(&mut self, user: User) {
        debug!(user_id = %user.id_label(), "editing user");
        self.state.form.load(user);
        self.state.editing = true;
    }

    pub fn delete(&mut self, id: UserId) -> Request {
        Request::Delete { id }
    }

    /// Delete trigger for a listed record. A record the remote never
    /// assigned an id cannot be addressed, which counts as a failed delete.
    pub fn delete_user(&mut self, user: &User) -> Option<Request> {
        match user.id.clone() {
            Some(id) => Some(self.delete(id)),
            None => {
                warn!("listed user has no id; nothing to delete");
                self.state.error = Some(DELETE_ERROR.to_string());
                None
            }
        }
    }

    pub fn settle(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Fetched { page, result } => self.settle_fetch(page, result),
            Outcome::Saved { op, user, result } => self.settle_save(op, user, result),
            Outcome::Deleted { id, result } => self.settle_delete(id, result),
        }
    }

    /// Run `request` against the remote and apply its outcome.
    pub async fn perform(&mut self, request: Request) {
        let remote = self.remote();
        let outcome = request.execute(remote.as_ref()).await;
        self.settle(outcome);
    }

    /// Stop reacting to scroll positions.
    pub fn teardown(&mut self) {
        self.scroll.cancel();
    }

    fn begin_fetch(&mut self) -> Request {
        self.state.loading = true;
        Request::FetchPage {
            page: self.state.page,
            limit: self.page_size,
        }
    }

    fn settle_fetch(&mut self, page: u32, result: RemoteResult<Vec<User>>) {
        match result {
            Ok(users) => {
                info!(page, count = users.len(), "page loaded");
                self.state.users.extend(users);
            }
            Err(err) => {
                warn!(page, error = %err, "page fetch failed");
                self.state.error = Some(FETCH_ERROR.to_string());
            }
        }
        self.state.loading = false;
    }

    fn settle_save(&mut self, op: SaveOp, submitted: User, result: RemoteResult<User>) {
        let saved = match result {
            Ok(saved) => saved,
            Err(err) => {
                warn!(?op, error = %err, "save failed");
                self.state.error = Some(SAVE_ERROR.to_string());
                return;
            }
        };
        match op {
            SaveOp::Update { id } => {
                info!(user_id = %id, "user updated");
                for user in self.state.users.iter_mut() {
                    if user.id.as_ref() == Some(&id) {
                        *user = submitted.clone();
                    }
                }
            }
            SaveOp::Create => {
                info!(user_id = %saved.id_label(), "user created");
                self.state.users.push(saved);
            }
        }
        self.state.form.reset();
        self.state.editing = false;
    }

    fn settle_delete(&mut self, id: UserId, result: RemoteResult<()>) {
        match result {
            Ok(()) => {
                info!(user_id = %id, "user deleted");
                self.state
                    .users
                    .retain(|user| user.id.as_ref() != Some(&id));
            }
            Err(err) => {
                warn!(user_id = %id, error = %err, "delete failed");
                self.state.error = Some(DELETE_ERROR.to_string());
            }
        }
    }
}
