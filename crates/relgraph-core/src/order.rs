//! Total orders over vertex values
//!
//! Every tie-break in the graph (root order, neighbour order, equivalence
//! class representatives) goes through a [`VertexOrder`] supplied at
//! construction.

use crate::bail_invalid;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Display;

/// A caller-supplied total order over vertices
pub trait VertexOrder<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Smallest item of `items` under this order, or `None` if empty
    fn min_of<'a, I>(&self, items: I) -> Option<&'a T>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        items.into_iter().min_by(|a, b| self.compare(a, b))
    }

    /// Sort `items` ascending under this order
    fn sort(&self, items: &mut [T]) {
        items.sort_by(|a, b| self.compare(a, b));
    }

    /// Sort borrowed vertices ascending under this order
    fn sort_refs(&self, items: &mut [&T]) {
        items.sort_by(|a, b| self.compare(a, b));
    }
}

/// The vertex type's own `Ord`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> VertexOrder<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders vertices by parsing their textual form as an integer.
///
/// Integer-like labels compare numerically (`"9" < "10"`) and sort before
/// anything that does not parse. Labels that do not parse, or parse to the
/// same number, fall back to comparing their text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericLabelOrder;

/// Sort key for a label: integers first (by value), then by text
type LabelKey = (bool, Option<i128>, String);

impl NumericLabelOrder {
    fn key(label: &impl Display) -> LabelKey {
        let text = label.to_string();
        let number = text.trim().parse::<i128>().ok();
        (number.is_none(), number, text)
    }
}

impl<T: Display> VertexOrder<T> for NumericLabelOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        Self::key(a).cmp(&Self::key(b))
    }

    fn sort(&self, items: &mut [T]) {
        items.sort_by_cached_key(|item| Self::key(item));
    }

    fn sort_refs(&self, items: &mut [&T]) {
        items.sort_by_cached_key(|item| Self::key(*item));
    }
}

/// Adapts a comparison closure into a [`VertexOrder`]
#[derive(Debug, Clone, Copy)]
pub struct OrderFn<F>(pub F);

impl<T, F> VertexOrder<T> for OrderFn<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// Order selectable from configuration for label-like vertex types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelOrder {
    Natural,
    #[default]
    NumericLabel,
}

impl<T: Ord + Display> VertexOrder<T> for LabelOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self {
            LabelOrder::Natural => NaturalOrder.compare(a, b),
            LabelOrder::NumericLabel => NumericLabelOrder.compare(a, b),
        }
    }

    fn sort(&self, items: &mut [T]) {
        match self {
            LabelOrder::Natural => NaturalOrder.sort(items),
            LabelOrder::NumericLabel => NumericLabelOrder.sort(items),
        }
    }

    fn sort_refs(&self, items: &mut [&T]) {
        match self {
            LabelOrder::Natural => NaturalOrder.sort_refs(items),
            LabelOrder::NumericLabel => NumericLabelOrder.sort_refs(items),
        }
    }
}

impl std::str::FromStr for LabelOrder {
    type Err = crate::error::GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "natural" => Ok(LabelOrder::Natural),
            "numeric-label" | "numeric" => Ok(LabelOrder::NumericLabel),
            other => bail_invalid!("label order (expected: natural, numeric-label)", other),
        }
    }
}
