/// Position within a fixed, non-empty list of hero media.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
}

impl Carousel {
    /// A carousel over `len` items; a zero length is treated as one item.
    pub fn new(len: usize) -> Self {
        Self { len: len.max(1), active: 0 }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// Advances one step, wrapping back to the first item.
    pub fn tick(self) -> Self {
        Self { active: (self.active + 1) % self.len, ..self }
    }

    /// Jumps to `index`. Out-of-range indices leave the carousel untouched.
    pub fn select(self, index: usize) -> Self {
        if index >= self.len {
            log::warn!("ignoring carousel selection {} (only {} items)", index, self.len);
            return self;
        }
        Self { active: index, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_wrap_modulo_length() {
        for len in 1..6 {
            let mut carousel = Carousel::new(len);
            for k in 1..20 {
                carousel = carousel.tick();
                assert_eq!(carousel.active(), k % len);
            }
        }
    }

    #[test]
    fn selection_overrides_and_ticks_resume_from_it() {
        let carousel = Carousel::new(4).tick().select(2);
        assert_eq!(carousel.active(), 2);
        assert_eq!(carousel.tick().active(), 3);
        assert_eq!(carousel.tick().tick().active(), 0);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let carousel = Carousel::new(4).tick();
        assert_eq!(carousel.select(4), carousel);
    }

    #[test]
    fn empty_list_still_has_one_slot() {
        let carousel = Carousel::new(0);
        assert_eq!(carousel.len(), 1);
        assert_eq!(carousel.tick().active(), 0);
    }
}
