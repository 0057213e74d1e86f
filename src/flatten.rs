//! Flattening of arbitrarily nested sequences into a single flat one.

/// One item of a nested sequence: either a plain value or another sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element<V> {
    Scalar(V),
    Nested(Vec<Element<V>>),
}

/// Flattens `elements` depth first, left to right. Empty nested sequences
/// contribute nothing.
///
/// ```
/// use ordered_dict::flatten::{flatten, Element::{Nested, Scalar}};
///
/// let list = vec![
///     Scalar(1),
///     Scalar(2),
///     Nested(vec![Scalar(3), Scalar(4)]),
///     Nested(vec![Scalar(5), Scalar(6)]),
/// ];
///
/// assert_eq!(vec![1, 2, 3, 4, 5, 6], flatten(list));
/// ```
pub fn flatten<V>(elements: Vec<Element<V>>) -> Vec<V> {
    let mut out = Vec::new();
    flatten_into(elements, &mut out);
    out
}

fn flatten_into<V>(elements: Vec<Element<V>>, out: &mut Vec<V>) {
    for element in elements {
        match element {
            Element::Scalar(v) => out.push(v),
            Element::Nested(inner) => flatten_into(inner, out),
        }
    }
}

/// Same as [`flatten`], but borrows the values instead of taking them.
pub fn flatten_ref<V>(elements: &[Element<V>]) -> Vec<&V> {
    let mut out = Vec::new();
    flatten_ref_into(elements, &mut out);
    out
}

fn flatten_ref_into<'a, V>(elements: &'a [Element<V>], out: &mut Vec<&'a V>) {
    for element in elements {
        match element {
            Element::Scalar(v) => out.push(v),
            Element::Nested(inner) => flatten_ref_into(inner, out),
        }
    }
}
