use contracts::domain::post_comment::PostComment;
use leptos::prelude::*;

use crate::domain::post_comment::api;
use crate::shared::alerts::AlertService;
use crate::shared::date_utils::start_of_today;
use crate::shared::navigation::previous_state;

/// ViewModel for the post comment edit form
#[derive(Clone, Copy)]
pub struct PostCommentUpdateViewModel {
    pub form: RwSignal<PostComment>,
    pub is_saving: RwSignal<bool>,
    alerts: AlertService,
}

impl PostCommentUpdateViewModel {
    pub fn new(alerts: AlertService) -> Self {
        Self {
            form: RwSignal::new(PostComment::default()),
            is_saving: RwSignal::new(false),
            alerts,
        }
    }

    /// Populate the form. A new comment is stamped with the start of today.
    pub fn activate(&self, mut comment: PostComment) {
        if comment.id.is_none() {
            comment.commented_on = Some(start_of_today());
        }
        self.form.set(comment);
    }

    pub fn save(&self) {
        self.is_saving.set(true);
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let comment = vm.form.get_untracked();
            let result = if comment.id.is_some() {
                api::service().update(&comment).await
            } else {
                api::service().create(&comment).await
            };
            vm.is_saving.set(false);
            match result {
                Ok(_) => previous_state(),
                Err(error) => vm.alerts.error(format!("Saving post comment failed: {error}")),
            }
        });
    }
}
