//! Server Endpoints
//!
//! Every path the page scripts talk to.

pub const PROFILE_EDIT: &str = "/users/profile_edit/";
pub const PROFILE_IMG_EDIT: &str = "/users/profile_img_edit/";
pub const POSTS_CREATE: &str = "/users/posts_create/";
pub const QUESTION_CREATE: &str = "/users/question_create/";
pub const WRITE_TO_ADMIN: &str = "/users/write_to_admin/";
pub const NO_INFO: &str = "/users/no_info/";
pub const PROFILE_PAGE: &str = "/users/profile/";
pub const PROFILE_BUTTONS: &str = "/users/profile_buttons/";
pub const TIME_IS_UP: &str = "/questions/time_is_up/";
pub const HOME_PAGE: &str = "/";

/// Admin list pages with an availability toggle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminResource {
    Categories,
    Questions,
    Users,
    Posts,
}

impl AdminResource {
    pub const ALL: [AdminResource; 4] = [
        AdminResource::Categories,
        AdminResource::Questions,
        AdminResource::Users,
        AdminResource::Posts,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            AdminResource::Categories => "categories",
            AdminResource::Questions => "questions",
            AdminResource::Users => "users",
            AdminResource::Posts => "posts",
        }
    }

    /// `/myadmin/{slug}-delete/{id}/`
    pub fn toggle_url(self, id: &str) -> String {
        format!("/myadmin/{}-delete/{}/", self.slug(), id)
    }
}

/// `/myadmin/users-is-staff/{id}/`
pub fn staff_toggle_url(id: &str) -> String {
    format!("/myadmin/users-is-staff/{}/", id)
}
