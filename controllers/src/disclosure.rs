use crate::error::{check_index, ControllerError};

/// Keeps at most one of `len` items expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisclosureController {
    len: usize,
    open: Option<usize>,
}

impl DisclosureController {
    pub fn new(len: usize, initial: Option<usize>) -> Result<Self, ControllerError> {
        if len == 0 {
            return Err(ControllerError::EmptyItems);
        }
        let open = initial.map(|index| check_index(index, len)).transpose()?;
        Ok(Self { len, open })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Collapses `index` if it is open, otherwise opens it and closes
    /// whatever was open before.
    pub fn toggle(&mut self, index: usize) -> Result<(), ControllerError> {
        let index = check_index(index, self.len).map_err(|err| {
            tracing::warn!(%err, "rejected disclosure index");
            err
        })?;
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faq_scenario() {
        let mut faq = DisclosureController::new(8, None).expect("non-empty");
        assert_eq!(faq.open_index(), None);

        faq.toggle(2).expect("in range");
        assert_eq!(faq.open_index(), Some(2));
        faq.toggle(5).expect("in range");
        assert_eq!(faq.open_index(), Some(5));
        faq.toggle(5).expect("in range");
        assert_eq!(faq.open_index(), None);
    }

    #[test]
    fn toggling_twice_from_closed_closes_again() {
        for index in 0..4 {
            let mut faq = DisclosureController::new(4, None).expect("non-empty");
            faq.toggle(index).expect("in range");
            faq.toggle(index).expect("in range");
            assert_eq!(faq.open_index(), None);
        }
    }

    #[test]
    fn opening_another_item_closes_the_previous_one() {
        let mut tabs = DisclosureController::new(3, Some(0)).expect("non-empty");
        tabs.toggle(2).expect("in range");

        assert!(tabs.is_open(2));
        assert!(!tabs.is_open(0));
        assert_eq!((0..3).filter(|&i| tabs.is_open(i)).count(), 1);
    }

    #[test]
    fn toggling_the_open_tab_collapses_it() {
        let mut tabs = DisclosureController::new(3, Some(0)).expect("non-empty");
        tabs.toggle(0).expect("in range");
        assert_eq!(tabs.open_index(), None);
    }

    #[test]
    fn out_of_range_toggle_is_rejected() {
        let mut faq = DisclosureController::new(3, Some(1)).expect("non-empty");
        assert_eq!(
            faq.toggle(3),
            Err(ControllerError::InvalidIndex { index: 3, len: 3 })
        );
        assert_eq!(faq.open_index(), Some(1));
        assert!(!faq.is_open(7));
    }

    #[test]
    fn construction_checks_bounds() {
        assert_eq!(
            DisclosureController::new(0, None),
            Err(ControllerError::EmptyItems)
        );
        assert_eq!(
            DisclosureController::new(2, Some(2)),
            Err(ControllerError::InvalidIndex { index: 2, len: 2 })
        );
        assert_eq!(DisclosureController::new(2, Some(1)).map(|d| d.len()), Ok(2));
    }
}
