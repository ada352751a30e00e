/// Staggered fade-and-rise used for every rendered note card.
///
/// The keyframes (`note-enter`) live in `style/tailwind.css`; this only
/// computes the per-item inline style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct EntranceAnimation {
    pub duration_ms: u32,
    pub stagger_ms: u32,
    pub translate_y_px: u32,
    pub easing: &'static str,
}

pub(crate) const NOTE_ENTRANCE: EntranceAnimation = EntranceAnimation {
    duration_ms: 700,
    stagger_ms: 120,
    translate_y_px: 20,
    easing: "cubic-bezier(0.25, 0.1, 0.25, 1)",
};

impl EntranceAnimation {
    pub fn delay_for(&self, index: usize) -> u64 {
        index as u64 * self.stagger_ms as u64
    }

    pub fn style_for(&self, index: usize) -> String {
        // `backwards` holds the hidden start frame during the delay only, so the
        // hover transform applies once the animation ends.
        format!(
            "--note-enter-y: {}px; animation: note-enter {}ms {} {}ms backwards;",
            self.translate_y_px,
            self.duration_ms,
            self.easing,
            self.delay_for(index)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_is_staggered_by_index() {
        assert_eq!(NOTE_ENTRANCE.delay_for(0), 0);
        assert_eq!(NOTE_ENTRANCE.delay_for(1), 120);
        assert_eq!(NOTE_ENTRANCE.delay_for(5), 600);
    }

    #[test]
    fn test_style_for_second_item() {
        assert_eq!(
            NOTE_ENTRANCE.style_for(1),
            "--note-enter-y: 20px; animation: note-enter 700ms cubic-bezier(0.25, 0.1, 0.25, 1) 120ms backwards;"
        );
    }
}
