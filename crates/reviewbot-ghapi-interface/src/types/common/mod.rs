mod collaborator_permission;
mod user;

pub use collaborator_permission::GhCollaboratorPermission;
pub use user::GhUser;
