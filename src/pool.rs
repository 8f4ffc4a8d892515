/// Ordered live-membership container for one entity kind.
///
/// Every removal path scans back-to-front so a member can be taken out in
/// the middle of a pass without disturbing the members still to be visited.
/// Callers never see indices.

#[derive(Clone, Debug)]
pub struct Pool<T> {
    items: Vec<T>,
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Pool<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a freshly spawned member at the back.
    pub fn spawn(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Run `f` on every live member, in insertion order.
    pub fn update<F: FnMut(&mut T)>(&mut self, mut f: F) {
        for item in self.items.iter_mut() {
            f(item);
        }
    }

    /// Drop every member matching `dead`; returns how many were dropped.
    pub fn prune<F: FnMut(&T) -> bool>(&mut self, mut dead: F) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !dead(item));
        before - self.items.len()
    }

    /// Remove and return every member matching `pred`, in back-to-front scan order.
    pub fn extract<F: FnMut(&T) -> bool>(&mut self, mut pred: F) -> Vec<T> {
        let mut taken = Vec::new();
        for i in (0..self.items.len()).rev() {
            if pred(&self.items[i]) {
                taken.push(self.items.remove(i));
            }
        }
        taken
    }

    /// Reset in place every member matching `expired`; nothing is removed.
    pub fn recycle<P, F>(&mut self, mut expired: P, mut reset: F) -> usize
    where
        P: FnMut(&T) -> bool,
        F: FnMut(&mut T),
    {
        let mut count = 0;
        for item in self.items.iter_mut() {
            if expired(item) {
                reset(item);
                count += 1;
            }
        }
        count
    }

    /// Pair members of `self` against members of `other`, both scanned
    /// back-to-front.  The first `other` member that `hit` matches is removed
    /// together with the `self` member, and the scan moves on to the next
    /// `self` member, so each member takes part in at most one pair.
    pub fn pair_off<U, F>(&mut self, other: &mut Pool<U>, mut hit: F) -> Vec<(T, U)>
    where
        F: FnMut(&T, &U) -> bool,
    {
        let mut pairs = Vec::new();
        for i in (0..self.items.len()).rev() {
            let Some(found) = (0..other.items.len())
                .rev()
                .find(|&j| hit(&self.items[i], &other.items[j]))
            else {
                continue;
            };
            let theirs = other.items.remove(found);
            let ours = self.items.remove(i);
            pairs.push((ours, theirs));
        }
        pairs
    }
}

impl<T> FromIterator<T> for Pool<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Pool<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
