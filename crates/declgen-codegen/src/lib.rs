pub mod comment;
pub mod emitter;
pub mod overrides;
pub mod resolver;
pub mod snapshot;
pub mod specials;
pub mod typescript;

pub use comment::{BlockCommentMerger, CommentMerger};
pub use emitter::{DeclarationEmitter, EmitOptions};
pub use overrides::{OverrideFn, OverrideKey, OverrideRegistry};
pub use resolver::{DepthFirstResolver, PropertyResolver};
pub use snapshot::{load_snapshot, parse_snapshot};
pub use typescript::{
    Error, GenerationReport, NamespacedFormatter, TypeFormatter, TypeScriptGenerator,
};
