pub mod cli;
pub mod error;
pub mod request;
pub mod revision;
pub mod svn;

pub use error::{InvalidRevision, Reason, SelectorError};
pub use request::{
    resolve, ComparisonRequest, Endpoint, LocalFilesystem, Location, Mode, PathLookup,
};
pub use revision::{Revision, RevisionPair};
