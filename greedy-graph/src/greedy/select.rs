/// Which vertex wins when several share the minimum key during a greedy scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum TieBreak {
    /// Lowest index attaining the minimum (strict comparison while scanning).
    #[default]
    FirstMinimum,
    /// Highest index attaining the minimum (non-strict comparison while scanning).
    LastMinimum,
}

/// Pick the minimum key among `candidates`, scanned in the order given.
pub(crate) fn select_min<K, I>(candidates: I, tie_break: TieBreak) -> Option<(usize, K)>
where
    K: Ord + Copy,
    I: IntoIterator<Item = (usize, K)>,
{
    let mut best: Option<(usize, K)> = None;
    for (index, key) in candidates {
        let replace = match best {
            None => true,
            Some((_, current)) => match tie_break {
                TieBreak::FirstMinimum => key < current,
                TieBreak::LastMinimum => key <= current,
            },
        };
        if replace {
            best = Some((index, key));
        }
    }
    best
}
