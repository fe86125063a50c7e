//! Sequence helpers over any ordered, indexable container.
//!
//! These take anything that views as a slice, so handing them a non-sequence
//! does not compile. Callers holding a [`Value`](crate::value::Value) use the
//! [`dynamic`] forms instead, which report a wrong-kind argument as an error.
//!
//! None of these mutate their input. Functions returning sub-ranges borrow the
//! caller's elements; the rest clone into a new `Vec`.

pub mod dynamic;

pub fn first<T, S>(seq: &S) -> Option<&T>
where
    S: AsRef<[T]> + ?Sized,
{
    seq.as_ref().first()
}

pub fn last<T, S>(seq: &S) -> Option<&T>
where
    S: AsRef<[T]> + ?Sized,
{
    seq.as_ref().last()
}

/// Everything after the first element.
pub fn rest<T, S>(seq: &S) -> &[T]
where
    S: AsRef<[T]> + ?Sized,
{
    let items = seq.as_ref();
    items.get(1..).unwrap_or(&[])
}

/// Everything before the last element.
pub fn initial<T, S>(seq: &S) -> &[T]
where
    S: AsRef<[T]> + ?Sized,
{
    let items = seq.as_ref();
    match items.len() {
        0 => &[],
        n => &items[..n - 1],
    }
}

pub fn reverse<T, S>(seq: &S) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]> + ?Sized,
{
    seq.as_ref().iter().rev().cloned().collect()
}

/// Distinct elements, keeping the first occurrence of each.
pub fn uniq<T, S>(seq: &S) -> Vec<T>
where
    T: Clone + PartialEq,
    S: AsRef<[T]> + ?Sized,
{
    let mut dest: Vec<T> = Vec::new();
    for item in seq.as_ref() {
        if !dest.contains(item) {
            dest.push(item.clone());
        }
    }
    dest
}

pub fn without<T, S>(seq: &S, omit: &[T]) -> Vec<T>
where
    T: Clone + PartialEq,
    S: AsRef<[T]> + ?Sized,
{
    seq.as_ref()
        .iter()
        .filter(|item| !omit.contains(item))
        .cloned()
        .collect()
}

pub fn has<T, S>(needle: &T, haystack: &S) -> bool
where
    T: PartialEq,
    S: AsRef<[T]> + ?Sized,
{
    haystack.as_ref().contains(needle)
}

pub fn push<T, S>(seq: &S, item: T) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]> + ?Sized,
{
    let items = seq.as_ref();
    let mut out = Vec::with_capacity(items.len() + 1);
    out.extend_from_slice(items);
    out.push(item);
    out
}

pub fn prepend<T, S>(seq: &S, item: T) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]> + ?Sized,
{
    let items = seq.as_ref();
    let mut out = Vec::with_capacity(items.len() + 1);
    out.push(item);
    out.extend_from_slice(items);
    out
}

/// The half-open range `[start, end)`, defaulting to the whole sequence.
///
/// Returns `None` when the bounds fall outside the sequence or cross.
pub fn slice<T, S>(seq: &S, start: Option<usize>, end: Option<usize>) -> Option<&[T]>
where
    S: AsRef<[T]> + ?Sized,
{
    let items = seq.as_ref();
    let start = start.unwrap_or(0);
    let end = end.unwrap_or(items.len());
    items.get(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_pick_the_ends() {
        let list = vec![1, 2, 3];
        assert_eq!(first(&list), Some(&1));
        assert_eq!(last(&list), Some(&3));

        let empty: Vec<i32> = Vec::new();
        assert_eq!(first(&empty), None);
        assert_eq!(last(&empty), None);
    }

    #[test]
    fn rest_and_initial_drop_one_end() {
        let list = [1, 2, 3, 4];
        assert_eq!(rest(&list), &[2, 3, 4]);
        assert_eq!(initial(&list), &[1, 2, 3]);

        let empty: [i32; 0] = [];
        assert!(rest(&empty).is_empty());
        assert!(initial(&empty).is_empty());
    }

    #[test]
    fn reverse_twice_restores_order() {
        let list = vec!["a", "b", "c"];
        assert_eq!(reverse(&list), vec!["c", "b", "a"]);
        assert_eq!(reverse(&reverse(&list)), list);
    }

    #[test]
    fn uniq_keeps_first_occurrence() {
        assert_eq!(uniq(&[1, 1, 2, 2, 3]), vec![1, 2, 3]);
        assert_eq!(uniq(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[test]
    fn uniq_uses_structural_equality() {
        let a = vec![1, 2];
        let b = vec![1, 2];
        assert_eq!(uniq(&[a.clone(), b]), vec![a]);
    }

    #[test]
    fn without_and_has_compare_by_value() {
        let list = vec![String::from("a"), String::from("b"), String::from("c")];
        assert_eq!(without(&list, &[String::from("b")]), vec!["a", "c"]);
        assert!(has(&String::from("c"), &list));
        assert!(!has(&String::from("z"), &list));
    }

    #[test]
    fn push_and_prepend_leave_input_untouched() {
        let list = vec![1, 2];
        let saved = list.clone();
        assert_eq!(push(&list, 3), vec![1, 2, 3]);
        assert_eq!(prepend(&list, 0), vec![0, 1, 2]);
        assert_eq!(list, saved);
    }

    #[test]
    fn slice_defaults_to_whole_range() {
        let list = [1, 2, 3, 4, 5];
        assert_eq!(slice(&list, Some(1), Some(3)), Some(&[2, 3][..]));
        assert_eq!(slice(&[1, 2, 3], Some(2), None), Some(&[3][..]));
        assert_eq!(slice(&list, None, None), Some(&list[..]));
        assert_eq!(slice(&list, Some(4), Some(2)), None);
        assert_eq!(slice(&list, Some(0), Some(9)), None);
    }

    #[test]
    fn slice_borrows_the_callers_elements() {
        let list = vec![String::from("x"), String::from("y")];
        let part = slice(&list, Some(1), None).unwrap();
        assert!(std::ptr::eq(&part[0], &list[1]));
    }
}
