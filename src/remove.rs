//! Removal that gives up the order of the survivors for one move per removed element.

/// Scans `v[f..l]` from the back and returns one past the last element for which `pred` is
/// `false`, or `f` if there is none.
pub fn find_if_not_backward<T, P>(v: &[T], f: usize, mut l: usize, pred: &mut P) -> usize
where
    P: FnMut(&T) -> bool,
{
    debug_assert!(f <= l && l <= v.len());

    loop {
        if l == f {
            return f;
        }
        l -= 1;
        if !pred(&v[l]) {
            return l + 1;
        }
    }
}

/// Moves all elements for which `pred` is `false` to the front of `v` and returns their count.
///
/// The survivors are not kept in their original order. Every removal candidate is filled with the
/// last surviving element, which means `v[new_len..]` contains exactly the removed elements.
pub fn remove_if_unstable<T, P>(v: &mut [T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut f = 0;
    let mut l = v.len();

    loop {
        f = match v[f..l].iter().position(&mut pred) {
            Some(offset) => f + offset,
            None => return l,
        };

        l = find_if_not_backward(v, f, l, &mut pred);
        if l == f {
            return l;
        }

        l -= 1;
        v.swap(f, l);
        f += 1;
    }
}

/// Like [`remove_if_unstable`], but drops the removed elements by truncating `v`.
pub fn remove_if_unstable_vec<T, P>(v: &mut Vec<T>, pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let new_len = remove_if_unstable(v.as_mut_slice(), pred);
    v.truncate(new_len);

    new_len
}
