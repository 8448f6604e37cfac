//! # Product Form Controller
//!
//! Drives one product form (add, or edit/delete of an existing row) through
//! validation, a single API call and the resulting notification.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Product Form States                                 │
//! │                                                                         │
//! │          submit()                                                       │
//! │  ┌──────┐ ─────────► ┌────────────┐  invalid (notification only)        │
//! │  │ Idle │ ◄───────── │ Validating │ ──────────────────────────┐         │
//! │  └──┬───┘            └─────┬──────┘                           │         │
//! │     │ ▲                    │ valid, loading = true            │         │
//! │     │ │                    ▼                                  │         │
//! │     │ │             ┌────────────┐                            │         │
//! │     │ │             │ Submitting │ ── one create/update/delete│         │
//! │     │ │             └─────┬──────┘                            │         │
//! │     │ │          ok ┌─────┴──────┐ err                        │         │
//! │     │ │             ▼            ▼                            │         │
//! │     │ │      ┌───────────┐ ┌────────┐                         │         │
//! │     │ └──────│ Succeeded │ │ Failed │  (read as Idle once the │         │
//! │     │        └───────────┘ └────────┘   notification expires) │         │
//! │     │                                                         │         │
//! │     │ request_delete()  ┌────────────────┐  cancel_delete()    │         │
//! │     └─────────────────► │ ConfirmPending │ ──────────► Idle ◄─┘         │
//! │                         └───────┬────────┘                              │
//! │                                 │ confirm_delete() → Submitting         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Locking
//! All form state sits behind one `std::sync::Mutex`. The lock is taken for
//! short synchronous sections only and is never held across an `.await`; the
//! `loading` flag it guards is what rejects a second concurrent mutation.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use inventory_core::validation::validate_draft;
use inventory_core::{FormDraft, Notification, NotificationKind, Product};
use tracing::{debug, info, warn};

use crate::api::ProductApi;
use crate::config::ClientConfig;
use crate::error::{ClientResult, FormError, FormResult};
use crate::notification::{NotificationController, NotificationId};

// =============================================================================
// Refresh Hook
// =============================================================================

/// Called after every successful mutation so the owner can re-fetch the list.
///
/// The form never patches a product list itself.
pub trait RefreshHook: Send + Sync {
    fn refresh(&self);
}

/// Refresh hook that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpRefresh;

impl RefreshHook for NoOpRefresh {
    fn refresh(&self) {}
}

// =============================================================================
// Intent and State
// =============================================================================

/// What the form was opened for.
#[derive(Debug, Clone, PartialEq)]
pub enum FormIntent {
    /// Create a new product.
    Add,
    /// Edit or delete an existing product.
    Edit(Product),
}

impl FormIntent {
    fn initial_draft(&self) -> FormDraft {
        match self {
            FormIntent::Add => FormDraft::new(),
            FormIntent::Edit(product) => FormDraft::from_product(product),
        }
    }
}

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
    ConfirmPending,
}

impl fmt::Display for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormState::Idle => "idle",
            FormState::Validating => "validating",
            FormState::Submitting => "submitting",
            FormState::Succeeded => "succeeded",
            FormState::Failed => "failed",
            FormState::ConfirmPending => "awaiting delete confirmation",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    Add,
    Update,
    Delete,
}

impl Operation {
    fn success_message(self) -> &'static str {
        match self {
            Operation::Add => "Product added successfully",
            Operation::Update => "Product updated successfully",
            Operation::Delete => "Product deleted successfully",
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            Operation::Add => "Failed to add product",
            Operation::Update => "Failed to update product",
            Operation::Delete => "Failed to delete product",
        }
    }
}

#[derive(Debug)]
struct FormInner {
    state: FormState,
    draft: FormDraft,
    open: bool,
    loading: bool,
    mounted: bool,
    /// Notification that keeps a terminal state visible.
    outcome: Option<NotificationId>,
}

// =============================================================================
// Controller
// =============================================================================

/// Form controller for one add form or one product row.
pub struct ProductFormController {
    api: Arc<dyn ProductApi>,
    refresh: Arc<dyn RefreshHook>,
    notifications: NotificationController,
    intent: FormIntent,
    inner: Mutex<FormInner>,
}

impl ProductFormController {
    /// Creates the controller behind an "add product" form.
    pub fn for_add(api: Arc<dyn ProductApi>, config: &ClientConfig) -> Self {
        Self::new(api, FormIntent::Add, config)
    }

    /// Creates the controller behind an existing product's edit and delete actions.
    pub fn for_product(api: Arc<dyn ProductApi>, product: Product, config: &ClientConfig) -> Self {
        Self::new(api, FormIntent::Edit(product), config)
    }

    fn new(api: Arc<dyn ProductApi>, intent: FormIntent, config: &ClientConfig) -> Self {
        ProductFormController {
            api,
            refresh: Arc::new(NoOpRefresh),
            notifications: NotificationController::new(config.notification_duration()),
            inner: Mutex::new(FormInner {
                state: FormState::Idle,
                draft: intent.initial_draft(),
                open: false,
                loading: false,
                mounted: true,
                outcome: None,
            }),
            intent,
        }
    }

    /// Sets the hook invoked after each successful mutation.
    pub fn with_refresh_hook(mut self, hook: Arc<dyn RefreshHook>) -> Self {
        self.refresh = hook;
        self
    }

    fn lock(&self) -> MutexGuard<'_, FormInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    pub fn intent(&self) -> &FormIntent {
        &self.intent
    }

    /// Current state; a terminal state reads as `Idle` once its notification is gone.
    pub fn state(&self) -> FormState {
        let inner = self.lock();
        match inner.state {
            FormState::Succeeded | FormState::Failed => match inner.outcome {
                Some(id) if self.notifications.is_showing(id) => inner.state,
                _ => FormState::Idle,
            },
            state => state,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub fn is_open(&self) -> bool {
        self.lock().open
    }

    pub fn draft(&self) -> FormDraft {
        self.lock().draft.clone()
    }

    /// The notification currently shown for this form.
    pub fn notification(&self) -> Option<Notification> {
        self.notifications.current()
    }

    pub fn notifications(&self) -> &NotificationController {
        &self.notifications
    }

    // =========================================================================
    // Draft Editing
    // =========================================================================

    /// Opens the form with a fresh draft.
    ///
    /// Rejected with [`FormError::Busy`] while a request is in flight, so the
    /// draft being submitted is never replaced underneath it.
    pub fn open(&self) -> FormResult<()> {
        let mut inner = self.lock();
        self.ensure_ready(&inner)?;
        inner.draft = self.intent.initial_draft();
        inner.open = true;
        if inner.state == FormState::ConfirmPending {
            inner.state = FormState::Idle;
        }
        Ok(())
    }

    /// Closes the form and discards the draft.
    pub fn close(&self) {
        let mut inner = self.lock();
        inner.draft.clear();
        inner.open = false;
        if inner.state == FormState::ConfirmPending {
            inner.state = FormState::Idle;
        }
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.lock().draft.set_name(name);
    }

    /// Applies a quantity keystroke; returns false if the mask rejected it.
    pub fn set_quantity(&self, text: &str) -> bool {
        self.lock().draft.set_quantity(text)
    }

    /// Applies a price keystroke; returns false if the mask rejected it.
    pub fn set_price(&self, text: &str) -> bool {
        self.lock().draft.set_price(text)
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Validates the draft and sends it as a create (add form) or update (edit form).
    ///
    /// A validation failure shows its message and makes no request. On an API
    /// failure the draft is kept so the user can retry.
    pub async fn submit(&self) -> FormResult<Product> {
        let (operation, product) = {
            let mut inner = self.lock();
            self.ensure_ready(&inner)?;

            if inner.state == FormState::ConfirmPending {
                return Err(invalid_transition("submit", inner.state));
            }

            inner.state = FormState::Validating;
            inner.outcome = None;

            let submission = match validate_draft(&inner.draft) {
                Ok(submission) => submission,
                Err(e) => {
                    debug!(error = %e, "Form draft rejected");
                    inner.state = FormState::Idle;
                    self.notifications.show(e.to_string(), NotificationKind::Failure);
                    return Err(e.into());
                }
            };

            // validate_draft guarantees a whole number within u32.
            let quantity = submission.quantity as u32;
            let name = inner.draft.name.trim().to_string();

            let (operation, product) = match &self.intent {
                FormIntent::Add => (Operation::Add, Product::new(name, quantity, submission.price)),
                FormIntent::Edit(original) => (
                    Operation::Update,
                    Product {
                        id: original.id.clone(),
                        name,
                        quantity,
                        price: submission.price,
                    },
                ),
            };

            inner.state = FormState::Submitting;
            inner.loading = true;
            (operation, product)
        };

        info!(id = %product.id, ?operation, "Submitting product");
        let result = match operation {
            Operation::Add => self.api.create(&product).await,
            _ => self.api.update(&product).await,
        };

        self.finish(operation, result)
    }

    // =========================================================================
    // Delete Confirmation
    // =========================================================================

    /// Asks for confirmation before deleting the product.
    pub fn request_delete(&self) -> FormResult<()> {
        let mut inner = self.lock();
        self.ensure_ready(&inner)?;

        if matches!(self.intent, FormIntent::Add) {
            return Err(invalid_transition("delete", inner.state));
        }

        inner.state = FormState::ConfirmPending;
        Ok(())
    }

    /// Dismisses the confirmation without touching the server.
    pub fn cancel_delete(&self) {
        let mut inner = self.lock();
        if inner.state == FormState::ConfirmPending {
            inner.state = FormState::Idle;
        }
    }

    /// Deletes the product after `request_delete`.
    pub async fn confirm_delete(&self) -> FormResult<()> {
        let id = {
            let mut inner = self.lock();
            self.ensure_ready(&inner)?;

            let id = match (&self.intent, inner.state) {
                (FormIntent::Edit(product), FormState::ConfirmPending) => product.id.clone(),
                _ => return Err(invalid_transition("confirm delete", inner.state)),
            };

            inner.state = FormState::Submitting;
            inner.outcome = None;
            inner.loading = true;
            id
        };

        info!(%id, "Deleting product");
        let result = self.api.delete(&id).await;

        self.finish(Operation::Delete, result)
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Tears the form down. Results of calls still in flight are discarded.
    pub fn unmount(&self) {
        let mut inner = self.lock();
        inner.mounted = false;
        inner.open = false;
        inner.draft.clear();
        inner.outcome = None;
        self.notifications.clear();
        debug!("Product form unmounted");
    }

    fn ensure_ready(&self, inner: &FormInner) -> FormResult<()> {
        if !inner.mounted {
            return Err(FormError::Unmounted);
        }
        if inner.loading {
            debug!(state = %inner.state, "Rejecting operation while a request is in flight");
            return Err(FormError::Busy);
        }
        Ok(())
    }

    fn finish<T>(&self, operation: Operation, result: ClientResult<T>) -> FormResult<T> {
        {
            let mut inner = self.lock();
            inner.loading = false;

            if !inner.mounted {
                debug!(?operation, ok = result.is_ok(), "Discarding result for unmounted form");
                return Err(FormError::Unmounted);
            }

            match &result {
                Ok(_) => {
                    inner.state = FormState::Succeeded;
                    inner.draft.clear();
                    inner.open = false;
                    let id = self
                        .notifications
                        .show(operation.success_message(), NotificationKind::Success);
                    inner.outcome = Some(id);
                }
                Err(e) => {
                    warn!(?operation, error = %e, "Product request failed");
                    inner.state = FormState::Failed;
                    let id = self
                        .notifications
                        .show(operation.failure_message(), NotificationKind::Failure);
                    inner.outcome = Some(id);
                }
            }
        }

        let value = result?;
        self.refresh.refresh();
        Ok(value)
    }
}

fn invalid_transition(operation: &str, state: FormState) -> FormError {
    FormError::InvalidTransition {
        operation: operation.to_string(),
        state: state.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use inventory_core::ValidationError;
    use tokio::sync::Notify;
    use uuid::Uuid;

    use crate::api::MockProductApi;
    use crate::error::ClientError;

    #[derive(Default)]
    struct CountingRefresh(AtomicUsize);

    impl RefreshHook for CountingRefresh {
        fn refresh(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl CountingRefresh {
        fn count(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    /// Holds every call open until `release` is notified.
    #[derive(Default)]
    struct GatedApi {
        release: Notify,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ProductApi for GatedApi {
        async fn list(&self) -> ClientResult<Vec<Product>> {
            Ok(Vec::new())
        }

        async fn create(&self, product: &Product) -> ClientResult<Product> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.release.notified().await;
            Ok(product.clone())
        }

        async fn update(&self, product: &Product) -> ClientResult<Product> {
            self.create(product).await
        }

        async fn delete(&self, _id: &str) -> ClientResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.release.notified().await;
            Ok(())
        }
    }

    fn widget() -> Product {
        Product {
            id: "p-1".to_string(),
            name: "Widget".to_string(),
            quantity: 5,
            price: 9.99,
        }
    }

    fn fill(form: &ProductFormController, name: &str, quantity: &str, price: &str) {
        form.open().unwrap();
        form.set_name(name);
        assert!(form.set_quantity(quantity));
        assert!(form.set_price(price));
    }

    async fn wait_until_loading(form: &ProductFormController) {
        while !form.is_loading() {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_add_product_end_to_end() {
        let mut api = MockProductApi::new();
        api.expect_create()
            .withf(|product| {
                product.name == "Widget"
                    && product.quantity == 5
                    && product.price == 9.99
                    && Uuid::parse_str(&product.id).is_ok()
            })
            .times(1)
            .returning(|product| Ok(product.clone()));

        let refresh = Arc::new(CountingRefresh::default());
        let form = ProductFormController::for_add(Arc::new(api), &ClientConfig::default())
            .with_refresh_hook(refresh.clone());

        fill(&form, "Widget", "5", "9.99");
        let created = form.submit().await.unwrap();

        assert_eq!(created.name, "Widget");
        assert_eq!(form.state(), FormState::Succeeded);
        assert_eq!(
            form.notification(),
            Some(Notification::success("Product added successfully"))
        );
        assert_eq!(refresh.count(), 1);
        assert!(form.draft().is_empty());
        assert!(!form.is_open());
        assert!(!form.is_loading());
    }

    #[tokio::test]
    async fn test_invalid_numbers_make_no_request() {
        // Any call on this mock panics.
        let api = MockProductApi::new();
        let form = ProductFormController::for_add(Arc::new(api), &ClientConfig::default());

        fill(&form, "Widget", "0", "9.99");
        let err = form.submit().await.unwrap_err();

        assert!(matches!(
            err,
            FormError::Validation(ValidationError::InvalidNumber)
        ));
        assert_eq!(form.state(), FormState::Idle);
        assert!(!form.is_loading());
        assert_eq!(
            form.notification(),
            Some(Notification::failure(
                "Please enter valid numbers for quantity and price."
            ))
        );
        assert_eq!(form.draft().quantity, "0");
    }

    #[tokio::test]
    async fn test_empty_name_rejected_before_numbers() {
        let form =
            ProductFormController::for_add(Arc::new(MockProductApi::new()), &ClientConfig::default());

        fill(&form, "   ", "", "");
        let err = form.submit().await.unwrap_err();

        assert!(matches!(
            err,
            FormError::Validation(ValidationError::Required { ref field }) if field == "name"
        ));
        assert_eq!(
            form.notification().map(|n| n.text),
            Some("name is required".to_string())
        );
    }

    #[tokio::test]
    async fn test_update_server_error_keeps_draft_for_retry() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut api = MockProductApi::new();
        {
            let calls = Arc::clone(&calls);
            api.expect_update()
                .withf(|product| product.id == "p-1" && product.quantity == 7)
                .times(2)
                .returning(move |product| {
                    if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                        Err(ClientError::Server {
                            status: 500,
                            body: "boom".to_string(),
                        })
                    } else {
                        Ok(product.clone())
                    }
                });
        }

        let refresh = Arc::new(CountingRefresh::default());
        let form = ProductFormController::for_product(Arc::new(api), widget(), &ClientConfig::default())
            .with_refresh_hook(refresh.clone());

        form.open().unwrap();
        assert!(form.set_quantity("7"));

        let err = form.submit().await.unwrap_err();
        assert!(matches!(
            err,
            FormError::Api(ClientError::Server { status: 500, .. })
        ));
        assert_eq!(form.state(), FormState::Failed);
        assert!(!form.is_loading());
        assert_eq!(
            form.notification(),
            Some(Notification::failure("Failed to update product"))
        );
        assert_eq!(form.draft().quantity, "7");
        assert_eq!(refresh.count(), 0);

        let updated = form.submit().await.unwrap();
        assert_eq!(updated.quantity, 7);
        assert_eq!(
            form.notification().map(|n| n.text),
            Some("Product updated successfully".to_string())
        );
        assert_eq!(refresh.count(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_product() {
        let mut api = MockProductApi::new();
        api.expect_update().times(1).returning(|product| {
            Err(ClientError::NotFound {
                id: product.id.clone(),
            })
        });

        let form = ProductFormController::for_product(Arc::new(api), widget(), &ClientConfig::default());
        form.open().unwrap();

        let err = form.submit().await.unwrap_err();
        assert!(matches!(err, FormError::Api(ClientError::NotFound { ref id }) if id == "p-1"));
        assert_eq!(form.draft(), FormDraft::from_product(&widget()));
    }

    #[tokio::test]
    async fn test_reopening_edit_form_discards_stale_typing() {
        let form = ProductFormController::for_product(
            Arc::new(MockProductApi::new()),
            widget(),
            &ClientConfig::default(),
        );

        form.open().unwrap();
        form.set_name("Gadget");
        form.close();
        assert!(form.draft().is_empty());

        form.open().unwrap();
        assert_eq!(form.draft().name, "Widget");
        assert_eq!(form.draft().price, "9.99");
    }

    #[tokio::test]
    async fn test_concurrent_submit_is_busy() {
        let api = Arc::new(GatedApi::default());
        let form = Arc::new(ProductFormController::for_add(api.clone(), &ClientConfig::default()));
        fill(&form, "Widget", "5", "9.99");

        let first = tokio::spawn({
            let form = Arc::clone(&form);
            async move { form.submit().await }
        });
        wait_until_loading(&form).await;

        assert_eq!(form.state(), FormState::Submitting);
        assert!(matches!(form.submit().await, Err(FormError::Busy)));

        api.release.notify_one();
        let created = first.await.unwrap().unwrap();

        assert_eq!(created.quantity, 5);
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
        assert!(!form.is_loading());
    }

    #[tokio::test]
    async fn test_reopen_while_submitting_keeps_draft() {
        let api = Arc::new(GatedApi::default());
        let form = Arc::new(ProductFormController::for_add(api.clone(), &ClientConfig::default()));
        fill(&form, "Widget", "5", "9.99");

        let pending = tokio::spawn({
            let form = Arc::clone(&form);
            async move { form.submit().await }
        });
        wait_until_loading(&form).await;

        assert!(matches!(form.open(), Err(FormError::Busy)));
        assert_eq!(form.draft().name, "Widget");
        assert_eq!(form.draft().quantity, "5");

        api.release.notify_one();
        assert_eq!(pending.await.unwrap().unwrap().name, "Widget");
        form.open().unwrap();
        assert!(form.draft().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_delete_has_no_side_effects() {
        let refresh = Arc::new(CountingRefresh::default());
        let form = ProductFormController::for_product(
            Arc::new(MockProductApi::new()),
            widget(),
            &ClientConfig::default(),
        )
        .with_refresh_hook(refresh.clone());

        form.request_delete().unwrap();
        assert_eq!(form.state(), FormState::ConfirmPending);

        form.cancel_delete();
        assert_eq!(form.state(), FormState::Idle);
        assert!(form.notification().is_none());
        assert_eq!(refresh.count(), 0);
    }

    #[tokio::test]
    async fn test_confirm_delete() {
        let mut api = MockProductApi::new();
        api.expect_delete()
            .withf(|id: &str| id == "p-1")
            .times(1)
            .returning(|_| Ok(()));

        let refresh = Arc::new(CountingRefresh::default());
        let form = ProductFormController::for_product(Arc::new(api), widget(), &ClientConfig::default())
            .with_refresh_hook(refresh.clone());

        form.request_delete().unwrap();
        form.confirm_delete().await.unwrap();

        assert_eq!(form.state(), FormState::Succeeded);
        assert_eq!(
            form.notification(),
            Some(Notification::success("Product deleted successfully"))
        );
        assert_eq!(refresh.count(), 1);
    }

    #[tokio::test]
    async fn test_delete_failure() {
        let mut api = MockProductApi::new();
        api.expect_delete()
            .times(1)
            .returning(|_| Err(ClientError::Network("connection refused".to_string())));

        let form = ProductFormController::for_product(Arc::new(api), widget(), &ClientConfig::default());

        form.request_delete().unwrap();
        let err = form.confirm_delete().await.unwrap_err();

        assert!(matches!(err, FormError::Api(ClientError::Network(_))));
        assert_eq!(form.state(), FormState::Failed);
        assert_eq!(
            form.notification(),
            Some(Notification::failure("Failed to delete product"))
        );
    }

    #[tokio::test]
    async fn test_invalid_delete_transitions() {
        let add_form =
            ProductFormController::for_add(Arc::new(MockProductApi::new()), &ClientConfig::default());
        assert!(matches!(
            add_form.request_delete(),
            Err(FormError::InvalidTransition { .. })
        ));

        let row = ProductFormController::for_product(
            Arc::new(MockProductApi::new()),
            widget(),
            &ClientConfig::default(),
        );
        let err = row.confirm_delete().await.unwrap_err();
        assert_eq!(err.to_string(), "Cannot confirm delete while form is idle");
    }

    #[tokio::test(start_paused = true)]
    async fn test_terminal_state_reads_idle_after_notification_expires() {
        let mut api = MockProductApi::new();
        api.expect_create().returning(|product| Ok(product.clone()));

        let form = ProductFormController::for_add(Arc::new(api), &ClientConfig::default());
        fill(&form, "Widget", "5", "9.99");
        form.submit().await.unwrap();
        assert_eq!(form.state(), FormState::Succeeded);

        tokio::time::advance(Duration::from_millis(1500)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }

        assert!(form.notification().is_none());
        assert_eq!(form.state(), FormState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_clears_failure_notification() {
        let mut api = MockProductApi::new();
        api.expect_update().times(1).returning(|_| {
            Err(ClientError::Server {
                status: 500,
                body: "boom".into(),
            })
        });

        let form = ProductFormController::for_product(Arc::new(api), widget(), &ClientConfig::default());
        form.open().unwrap();
        assert!(form.submit().await.is_err());
        assert_eq!(form.state(), FormState::Failed);
        assert!(form.notification().is_some());

        form.unmount();
        assert!(form.notification().is_none());
        assert!(form.notifications().expires_at().is_none());

        tokio::time::advance(Duration::from_millis(1600)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }

        assert!(form.notification().is_none());
        assert_eq!(form.state(), FormState::Idle);
    }

    #[tokio::test]
    async fn test_unmount_discards_in_flight_result() {
        let api = Arc::new(GatedApi::default());
        let refresh = Arc::new(CountingRefresh::default());
        let form = Arc::new(
            ProductFormController::for_add(api.clone(), &ClientConfig::default())
                .with_refresh_hook(refresh.clone()),
        );
        fill(&form, "Widget", "5", "9.99");

        let pending = tokio::spawn({
            let form = Arc::clone(&form);
            async move { form.submit().await }
        });
        wait_until_loading(&form).await;

        form.unmount();
        api.release.notify_one();

        assert!(matches!(pending.await.unwrap(), Err(FormError::Unmounted)));
        assert!(form.notification().is_none());
        assert_eq!(refresh.count(), 0);
        assert!(matches!(form.submit().await, Err(FormError::Unmounted)));
    }
}
