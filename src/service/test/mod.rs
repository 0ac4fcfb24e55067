use crate::error::AppError;
use crate::model::auth::Principal;
use crate::model::user::Role;


/// Builds a principal without going through the auth guard.
fn principal(user_id: i32, role: Role) -> Principal {
    Principal { user_id, role }
}
