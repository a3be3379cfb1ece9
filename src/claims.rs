//! Tracking of outstanding spend claims.
//!
//! A `SpendClaims` set is owned by whoever needs to detect double spends,
//! for example a mempool or a block being assembled. Keys use the structural
//! equality of [`SpendReference`].
use std::collections::{hash_set, HashSet};

use crate::{Error, Result, SpendReference};

#[derive(Debug, Default, Clone)]
pub struct SpendClaims {
    claimed: HashSet<SpendReference>,
}

impl SpendClaims {
    pub fn new() -> Self {
        SpendClaims::default()
    }

    /// Record a claim on the output identified by `reference`.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateSpend` if an equal reference was already claimed.
    /// The set is left unchanged in that case.
    pub fn claim(&mut self, reference: SpendReference) -> Result<()> {
        if !self.claimed.insert(reference) {
            log::warn!("double spend of {}", reference);
            return Err(Error::DuplicateSpend(reference));
        }

        Ok(())
    }

    /// Claim every reference in `references`, or none of them.
    ///
    /// Duplicates within `references` are rejected the same way as conflicts
    /// with existing claims.
    pub fn claim_all(&mut self, references: &[SpendReference]) -> Result<()> {
        if let Some(duplicate) = find_duplicate(references) {
            log::warn!("double spend of {} within one transaction", duplicate);
            return Err(Error::DuplicateSpend(duplicate));
        }

        if let Some(conflict) = references.iter().find(|r| self.claimed.contains(*r)) {
            log::warn!("double spend of {}", conflict);
            return Err(Error::DuplicateSpend(*conflict));
        }

        self.claimed.extend(references.iter().copied());
        Ok(())
    }

    /// Drop a claim. Returns `true` if the reference was claimed.
    pub fn release(&mut self, reference: &SpendReference) -> bool {
        self.claimed.remove(reference)
    }

    pub fn contains(&self, reference: &SpendReference) -> bool {
        self.claimed.contains(reference)
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, SpendReference> {
        self.claimed.iter()
    }
}

/// Find the first reference that occurs more than once in `references`.
pub fn find_duplicate(references: &[SpendReference]) -> Option<SpendReference> {
    let mut seen: HashSet<&SpendReference> = HashSet::with_capacity(references.len());

    references.iter().find(|r| !seen.insert(*r)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Uint256;

    fn reference(fill: u8, index: u16) -> SpendReference {
        SpendReference::new(Uint256::from_byte_array([fill; 32]), index)
    }

    #[test]
    fn test_claim_twice() {
        let mut claims = SpendClaims::new();

        claims.claim(reference(1, 0)).unwrap();
        claims.claim(reference(1, 1)).unwrap();

        match claims.claim(reference(1, 0)) {
            Err(Error::DuplicateSpend(r)) => assert_eq!(r, reference(1, 0)),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(claims.len(), 2);
    }

    #[test]
    fn test_release() {
        let mut claims = SpendClaims::new();
        claims.claim(reference(2, 5)).unwrap();

        assert!(claims.contains(&reference(2, 5)));
        assert!(claims.release(&reference(2, 5)));
        assert!(!claims.release(&reference(2, 5)));
        assert!(claims.is_empty());

        claims.claim(reference(2, 5)).unwrap();
    }

    #[test]
    fn test_claim_all_is_atomic() {
        let mut claims = SpendClaims::new();
        claims.claim(reference(3, 0)).unwrap();

        let batch = [reference(4, 0), reference(3, 0)];
        assert!(matches!(
            claims.claim_all(&batch),
            Err(Error::DuplicateSpend(_))
        ));
        assert!(!claims.contains(&reference(4, 0)));

        let batch = [reference(4, 0), reference(4, 0)];
        assert!(claims.claim_all(&batch).is_err());
        assert_eq!(claims.len(), 1);

        claims.claim_all(&[reference(4, 0), reference(4, 1)]).unwrap();
        assert_eq!(claims.iter().count(), 3);
    }

    #[test]
    fn test_find_duplicate() {
        assert_eq!(find_duplicate(&[]), None);
        assert_eq!(
            find_duplicate(&[reference(1, 0), reference(1, 1), reference(2, 0)]),
            None
        );
        assert_eq!(
            find_duplicate(&[
                reference(1, 0),
                reference(2, 0),
                reference(1, 1),
                reference(2, 0)
            ]),
            Some(reference(2, 0))
        );
    }
}
