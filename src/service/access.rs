//! Shared mutation-authorization policy.

use crate::model::user::Role;

/// Decides whether a principal may mutate a resource.
///
/// Pure decision function with no I/O. A principal may modify a resource it
/// authored; moderators and admins may modify any resource. The same function
/// is used for comment and post mutations.
///
/// # Arguments
/// - `resource_author_id` - ID of the user who authored the resource
/// - `requestor_id` - ID of the principal requesting the mutation
/// - `requestor_role` - Role of the principal
///
/// # Returns
/// - `true` - Self-authorship, or the role is moderator/admin
/// - `false` - Otherwise
pub fn can_modify(resource_author_id: i32, requestor_id: i32, requestor_role: Role) -> bool {
    if resource_author_id == requestor_id {
        return true;
    }

    matches!(requestor_role, Role::Admin | Role::Moderator)
}
