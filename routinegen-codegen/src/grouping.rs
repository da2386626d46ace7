//! Bucketing routine names by category.

use indexmap::IndexMap;

use crate::naming::categorize;

/// Group routine names by [`categorize`].
///
/// Categories keep the order in which they were first seen and each bucket
/// keeps the order of its routines.
pub fn group_by_category<I, S>(routines: I) -> IndexMap<String, Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
    for routine in routines {
        let routine = routine.as_ref();
        groups
            .entry(categorize(routine))
            .or_default()
            .push(routine.to_string());
    }
    groups
}
