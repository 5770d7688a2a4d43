#[derive(Debug, thiserror::Error)]
#[error("invalid type value")]
pub struct TypeValueError;

macro_rules! strenum {
	(@name $flat:ident $rename:literal) => { $rename };
	(@name $flat:ident) => { stringify!($flat) };

	( $(pub enum $enum_name:ident { $($flat:ident $(= $rename:literal)?),* $(,)? };)+ ) => {
		$(
			#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
			pub enum $enum_name {
				$($flat,)*
			}

			impl $enum_name {
				/// every token of this vocabulary, in declaration order
				pub const VALUES: &'static [&'static str] = &[
					$($crate::macros::strenum!(@name $flat $($rename)?),)*
				];

				pub const fn as_str(&self) -> &'static str {
					match self {
						$(Self::$flat => $crate::macros::strenum!(@name $flat $($rename)?),)*
					}
				}
			}

			impl AsRef<str> for $enum_name {
				fn as_ref(&self) -> &str {
					self.as_str()
				}
			}

			impl std::fmt::Display for $enum_name {
				fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
					f.write_str(self.as_str())
				}
			}

			impl TryFrom<&str> for $enum_name {
				type Error = $crate::macros::TypeValueError;

				fn try_from(value: &str) -> Result<Self, Self::Error> {
					$(
						if value == Self::$flat.as_str() {
							return Ok(Self::$flat);
						}
					)*
					Err($crate::macros::TypeValueError)
				}
			}
		)*
	};
}

pub(crate) use strenum;

/// implements [`crate::Base`] and [`crate::NotifyClass`] for a struct holding a `base: NotifyBase`
macro_rules! notify_class {
	($name:ident, $kind:expr) => {
		impl $crate::Base for $name {
			fn base(&self) -> &$crate::NotifyBase {
				&self.base
			}

			fn base_mut(&mut self) -> &mut $crate::NotifyBase {
				&mut self.base
			}

			fn as_any(&self) -> &dyn std::any::Any {
				self
			}

			fn into_any(self: Box<Self>) -> Box<dyn std::any::Any> {
				self
			}
		}

		impl $crate::NotifyClass for $name {
			const KIND: $crate::Kind = $kind;

			fn wrap(base: $crate::NotifyBase) -> Self {
				Self { base }
			}
		}
	};
}

pub(crate) use notify_class;

macro_rules! getter {
	($vis:vis $name:ident -> &str $prop:path) => {
		$vis fn $name(&self) -> Option<String> {
			$crate::Base::base(self).get_string(&$prop)
		}
	};

	($vis:vis $name:ident -> part $t:ty, $prop:path) => {
		$vis fn $name(&self) -> Option<$t> {
			$crate::Base::base(self).nested::<$t>(&$prop)
		}
	};
}

pub(crate) use getter;

macro_rules! setter {
	($vis:vis $name:ident -> &str $prop:path) => {
		paste::item! {
			$vis fn [< set_ $name >](&mut self, val: &str) -> Result<(), $crate::ValueError> {
				$crate::Base::base_mut(self).set_property(&$prop, serde_json::Value::String(val.to_string()))
			}
		}
	};

	($vis:vis $name:ident -> part $prop:path) => {
		paste::item! {
			$vis fn [< set_ $name >](&mut self, val: &dyn $crate::Notify) -> Result<(), $crate::ValueError> {
				$crate::Base::base_mut(self).set_nested(&$prop, val)
			}
		}
	};
}

pub(crate) use setter;

/// declares a pattern part (object, context or item) with its validation rules: `validates` lists
/// properties checked only when present, `requires` lists properties that must be present
macro_rules! part {
	(
		$(#[$meta:meta])*
		pub struct $name:ident : Object<$item:ty> {
			validates: [$($opt:expr),* $(,)?],
			requires: [$($req:expr),* $(,)?] $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug)]
		pub struct $name {
			base: $crate::NotifyBase,
		}

		$crate::macros::notify_class!($name, $crate::Kind::part(None, &[]));

		impl $crate::part::Object for $name {
			type Item = $item;
		}

		impl $crate::Notify for $name {
			fn validate_into(&self, acc: &mut $crate::ValidationError) {
				let base = $crate::Base::base(self);
				base.required_and_validate(acc, &$crate::property::ID, base.get_property(&$crate::property::ID).as_ref());
				base.optional_nested(acc, &$crate::property::ITEM, $crate::part::Object::item(self).as_ref());
				$(base.optional_and_validate(acc, &$opt, base.get_property(&$opt).as_ref());)*
				$(base.required_and_validate(acc, &$req, base.get_property(&$req).as_ref());)*
			}
		}
	};

	(
		$(#[$meta:meta])*
		pub struct $name:ident : Item {
			validates: [$($opt:expr),* $(,)?],
			requires: [$($req:expr),* $(,)?] $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug)]
		pub struct $name {
			base: $crate::NotifyBase,
		}

		$crate::macros::notify_class!($name, $crate::Kind::part(None, &[]));

		impl $crate::part::Item for $name {}

		impl $crate::Notify for $name {
			fn validate_into(&self, acc: &mut $crate::ValidationError) {
				let base = $crate::Base::base(self);
				base.required_and_validate(acc, &$crate::property::ID, base.get_property(&$crate::property::ID).as_ref());
				$(base.optional_and_validate(acc, &$opt, base.get_property(&$opt).as_ref());)*
				$(base.required_and_validate(acc, &$req, base.get_property(&$req).as_ref());)*
			}
		}
	};
}

pub(crate) use part;
