mod class;
mod comment;
mod event;
mod registry;
mod snapshot;
mod types;

pub use class::{ClassDescriptor, Metadata, MetadataKind};
pub use comment::CommentFragment;
pub use event::{EventGroup, ExtraSpec, MemberEntry};
pub use registry::TypeGraph;
pub use snapshot::Snapshot;
pub use types::{simple_class_name, TypeRef};
