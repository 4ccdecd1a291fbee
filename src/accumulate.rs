/// Folds `seq` into a caller-owned accumulator by mutating it in place.
///
/// `f` receives each element in order together with the accumulator, and the
/// same accumulator is handed back once every element has been visited. The
/// library does no locking: sharing one accumulator across threads is up to
/// the caller (wrap it in a `Mutex` and pass the guard).
pub fn each_with<'a, T, A, F>(seq: &[T], acc: &'a mut A, mut f: F) -> &'a mut A
where
    F: FnMut(&T, &mut A),
{
    for el in seq {
        f(el, &mut *acc);
    }
    acc
}
