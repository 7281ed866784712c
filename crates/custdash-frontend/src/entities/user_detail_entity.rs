use custdash_bridge::{api_error::ApiError, post::Post, user::User};
use gpui::{AppContext, Entity};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailState {
    #[default]
    Idle,
    Loading(u64),
    Loaded {
        user: User,
        posts: Vec<Post>,
    },
    NotFound(u64),
    Failed {
        user_id: u64,
        message: String,
    },
}

/// The customer currently shown on the detail page.
#[derive(Debug, Clone, Default)]
pub struct UserDetailEntity {
    pub state: DetailState,
}

impl UserDetailEntity {
    /// Marks `user_id` as the customer being loaded; responses for any other
    /// id are ignored from now on.
    pub fn begin(&mut self, user_id: u64) {
        self.state = DetailState::Loading(user_id);
    }

    /// Stores a detail response. Returns `false` when the response is stale.
    pub fn apply_response(
        &mut self,
        user_id: u64,
        result: Result<(User, Vec<Post>), ApiError>,
    ) -> bool {
        if self.state != DetailState::Loading(user_id) {
            return false;
        }

        self.state = match result {
            Ok((user, posts)) => DetailState::Loaded { user, posts },
            Err(e) if e.is_not_found() => DetailState::NotFound(user_id),
            Err(e) => DetailState::Failed {
                user_id,
                message: e.message,
            },
        };
        true
    }

    pub fn update<C: AppContext>(
        entity: &Entity<Self>,
        user_id: u64,
        result: Result<(User, Vec<Post>), ApiError>,
        cx: &mut C,
    ) {
        entity.update(cx, |this, cx| {
            if this.apply_response(user_id, result) {
                cx.notify();
            }
        });
    }
}
