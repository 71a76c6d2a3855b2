pub trait SliceExt<O> {
    /// Get mutable references to two distinct elements of a slice.
    ///
    /// Returns `None` if `a` and `b` are the same index or either is out of
    /// bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::ext::SliceExt;
    ///
    /// let mut values = [1, 2, 3];
    /// let (a, b) = values.get_mut2(2, 0).unwrap();
    /// std::mem::swap(a, b);
    /// assert_eq!(values, [3, 2, 1]);
    ///
    /// assert!(values.get_mut2(1, 1).is_none());
    /// assert!(values.get_mut2(1, 3).is_none());
    /// ```
    fn get_mut2(&mut self, a: usize, b: usize) -> Option<(&mut O, &mut O)>;
}

impl<T> SliceExt<T> for [T] {
    #[inline]
    fn get_mut2(&mut self, a: usize, b: usize) -> Option<(&mut T, &mut T)> {
        if a == b || a.max(b) >= self.len() {
            return None;
        }

        if a < b {
            let (head, tail) = self.split_at_mut(b);
            Some((&mut head[a], &mut tail[0]))
        } else {
            let (head, tail) = self.split_at_mut(a);
            Some((&mut tail[0], &mut head[b]))
        }
    }
}
