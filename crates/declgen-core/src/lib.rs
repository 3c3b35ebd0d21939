pub mod config;
pub mod error;
pub mod schema;

pub use config::DeclgenConfig;
pub use error::{DeclError, Result};
pub use schema::{
    ClassDescriptor, CommentFragment, EventGroup, ExtraSpec, MemberEntry, Metadata, MetadataKind,
    Snapshot, TypeGraph, TypeRef,
};
