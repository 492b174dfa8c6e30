//! User model -> entity mapper

use shoplist_core::entities::User;
use shoplist_core::value_objects::UserId;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            name: model.name,
            email: model.email,
        }
    }
}
