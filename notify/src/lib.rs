//! # coarnotify
//! > traits and types to build, parse and validate [COAR Notify](https://coar-notify.net) patterns
//!
//! Every notification wraps a json-ld document in an [`ActivityStream`]. Pattern classes add typed
//! accessors over it and the protocol's structural rules, checked either one property at a time
//! when setting values or all at once by [`Notify::validate`], which reports every problem in a
//! single [`ValidationError`] tree.
//!
//! ```rust
//! use coarnotify::{NotifyOptions, Registry};
//!
//! let doc = serde_json::json!({ "type": "Like" });
//! let err = Registry::default().get_by_object(doc, NotifyOptions::default());
//! assert!(err.is_err());
//! ```

mod macros;
pub(crate) use macros::{getter, notify_class, part, setter, strenum};
pub use macros::TypeValueError;

pub mod property;
pub use property::{Namespace, Property};

pub mod types;
pub use types::{ActivityStreamsType, NotifyType, SchemaOrgType};

pub mod uri;
pub use uri::{InvalidUri, UriComponent};

mod errors;
pub use errors::{FieldErrors, NotifyError, NotifyResult, ValidationError, ValueError};

mod stream;
pub use stream::{collapse, string_list, ActivityStream};

pub mod validate;
pub use validate::{Rule, Validator, ValidatorFn};

mod base;
pub use base::{Base, Kind, Notify, NotifyBase, NotifyClass, NotifyOptions, PropertiesBy};

pub mod part;
pub use part::{NotifyActor, NotifyItem, NotifyObject, NotifyService};

mod pattern;
pub use pattern::{NestedObject, NestedPatternObject, NotifyPattern, Pattern, Summary};

pub mod patterns;

mod registry;
pub use registry::{PatternBuilder, PatternEntry, Registry};

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

pub mod prelude {
	pub use crate::{
		part::{Actor, Item, Object, Service},
		Base, NestedPatternObject, Notify, NotifyClass, Pattern, Summary,
	};
}
