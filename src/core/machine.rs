//! Generic status-transition engine shared by every entity kind.
//!
//! An entity kind is a zero-sized marker implementing [`StatusMachine`]. It names its
//! status and transition enums and supplies one total lookup, [`StatusMachine::resulting_status`],
//! which is the whole transition table. Everything else (validity checks, available
//! transitions, terminal detection) is derived from that lookup, so the answers can
//! never disagree with each other.
//!
//! Nothing here performs I/O or holds state. Tables are `match` expressions compiled
//! into the binary, so the engine is safe to call from any number of threads.

use crate::errors::{Error, Result};
use serde::{Serialize, de::DeserializeOwned};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
    str::FromStr,
};

/// A named value in an entity kind's lifecycle: either a status or a transition.
///
/// Implemented through the crate's `tag_enum!` macro so every value has a canonical
/// SCREAMING_SNAKE_CASE name (used on the wire and in `Display`) and a label for display.
pub trait Tag:
    Copy
    + Eq
    + Hash
    + Debug
    + Display
    + FromStr<Err = Error>
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Every value, in declaration order
    const ALL: &'static [Self];

    /// Canonical name, e.g. `IN_PROGRESS`
    fn as_str(self) -> &'static str;

    /// Human-readable label, e.g. `In Progress`
    fn label(self) -> &'static str;
}

/// Parses a tag by canonical name, ignoring ASCII case and surrounding whitespace.
///
/// `what` names the value being parsed and ends up in the error message.
pub fn parse_tag<T: Tag>(input: &str, what: &'static str) -> Result<T> {
    let wanted = input.trim();
    T::ALL
        .iter()
        .copied()
        .find(|tag| tag.as_str().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| Error::unknown(what, input))
}

/// Declares a lifecycle enum together with its [`Tag`], `Display`, `FromStr` and serde impls.
macro_rules! tag_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($what:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal, $label:literal;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $crate::core::machine::Tag for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::machine::Tag::as_str(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::errors::Error;

            fn from_str(s: &str) -> $crate::errors::Result<Self> {
                $crate::core::machine::parse_tag(s, $what)
            }
        }
    };
}

pub(crate) use tag_enum;

/// The transition table of one entity kind.
///
/// Implementors provide [`resulting_status`](Self::resulting_status); a `(status, transition)`
/// pair that maps to `None` is illegal. All other methods are derived from it.
pub trait StatusMachine: Send + Sync + 'static {
    /// Lifecycle states of this kind
    type Status: Tag;
    /// Actions that move an entity of this kind between states
    type Transition: Tag;

    /// Short lowercase kind name, e.g. `lesson`
    const NAME: &'static str;

    /// Human-readable kind name, e.g. `Lesson`
    const LABEL: &'static str;

    /// Status assigned when an entity of this kind is created.
    fn initial_status() -> Self::Status;

    /// The table lookup: the status reached by applying `transition` in `status`,
    /// or `None` when the table defines no outcome.
    fn resulting_status(status: Self::Status, transition: Self::Transition)
    -> Option<Self::Status>;

    /// True iff the table defines an outcome for `(status, transition)`.
    #[must_use]
    fn is_valid_transition(status: Self::Status, transition: Self::Transition) -> bool {
        Self::resulting_status(status, transition).is_some()
    }

    /// Transitions legal from `status`, in declaration order.
    #[must_use]
    fn available_transitions(status: Self::Status) -> Vec<Self::Transition> {
        Self::Transition::ALL
            .iter()
            .copied()
            .filter(|&transition| Self::is_valid_transition(status, transition))
            .collect()
    }

    /// A status is terminal when no transition leaves it.
    #[must_use]
    fn is_terminal(status: Self::Status) -> bool {
        !Self::Transition::ALL
            .iter()
            .any(|&transition| Self::is_valid_transition(status, transition))
    }

    /// Like [`resulting_status`](Self::resulting_status) but turns an undefined
    /// transition into [`Error::InvalidTransition`] for callers that report it upward.
    fn transition(status: Self::Status, transition: Self::Transition) -> Result<Self::Status> {
        Self::resulting_status(status, transition).ok_or_else(|| Error::InvalidTransition {
            transition: transition.to_string(),
            status: status.to_string(),
        })
    }
}

/// Whether `transition` is legal from `status` for entity kind `M`.
#[must_use]
pub fn is_valid_transition<M: StatusMachine>(status: M::Status, transition: M::Transition) -> bool {
    M::is_valid_transition(status, transition)
}

/// The status `transition` leads to from `status` for entity kind `M`, if any.
///
/// `None` is a hard rejection. Callers must not substitute a fallback status.
#[must_use]
pub fn resulting_status<M: StatusMachine>(
    status: M::Status,
    transition: M::Transition,
) -> Option<M::Status> {
    M::resulting_status(status, transition)
}
