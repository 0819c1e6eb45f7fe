//! The solver hashes small integer keys almost exclusively, for which the FNV hasher is a better
//! fit than the default SipHash.

pub(crate) type HashSet<K> = fnv::FnvHashSet<K>;
