//=========================================================================
// Virtual Keys
//=========================================================================
//
// Windows Runtime virtual-key codes.
//
// The whole `u16` range is a valid `VirtualKey`; the named constants cover
// the codes the key table understands. Anything else still maps (to
// `Key::None`) through the key mapper.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::event::Key;
use super::key_mapper::PlatformKeyCode;

//=== VirtualKey ==========================================================

/// Windows virtual-key code as delivered by WinRT key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VirtualKey(pub u16);

impl VirtualKey {
    pub const NONE: Self = Self(0x00);
    pub const BACK: Self = Self(0x08);
    pub const TAB: Self = Self(0x09);
    pub const ENTER: Self = Self(0x0D);
    pub const SHIFT: Self = Self(0x10);
    pub const CONTROL: Self = Self(0x11);
    pub const MENU: Self = Self(0x12);
    pub const PAUSE: Self = Self(0x13);
    pub const CAPITAL_LOCK: Self = Self(0x14);
    pub const KANA: Self = Self(0x15);
    pub const KANJI: Self = Self(0x19);
    pub const ESCAPE: Self = Self(0x1B);
    pub const CONVERT: Self = Self(0x1C);
    pub const NON_CONVERT: Self = Self(0x1D);
    pub const SPACE: Self = Self(0x20);
    pub const PAGE_UP: Self = Self(0x21);
    pub const PAGE_DOWN: Self = Self(0x22);
    pub const END: Self = Self(0x23);
    pub const HOME: Self = Self(0x24);
    pub const LEFT: Self = Self(0x25);
    pub const UP: Self = Self(0x26);
    pub const RIGHT: Self = Self(0x27);
    pub const DOWN: Self = Self(0x28);
    pub const SELECT: Self = Self(0x29);
    pub const PRINT: Self = Self(0x2A);
    pub const EXECUTE: Self = Self(0x2B);
    pub const SNAPSHOT: Self = Self(0x2C);
    pub const INSERT: Self = Self(0x2D);
    pub const DELETE: Self = Self(0x2E);
    pub const HELP: Self = Self(0x2F);
    /// `Number0`; `Number1`..`Number9` follow contiguously.
    pub const NUMBER0: Self = Self(0x30);
    /// `A`; `B`..`Z` follow contiguously.
    pub const A: Self = Self(0x41);
    pub const LEFT_WINDOWS: Self = Self(0x5B);
    pub const RIGHT_WINDOWS: Self = Self(0x5C);
    pub const APPLICATION: Self = Self(0x5D);
    pub const SLEEP: Self = Self(0x5F);
    /// `NumberPad0`; `NumberPad1`..`NumberPad9` follow contiguously.
    pub const NUMBER_PAD0: Self = Self(0x60);
    pub const MULTIPLY: Self = Self(0x6A);
    pub const ADD: Self = Self(0x6B);
    pub const SEPARATOR: Self = Self(0x6C);
    pub const SUBTRACT: Self = Self(0x6D);
    pub const DECIMAL: Self = Self(0x6E);
    pub const DIVIDE: Self = Self(0x6F);
    /// `F1`; `F2`..`F24` follow contiguously.
    pub const F1: Self = Self(0x70);
    pub const NUMBER_KEY_LOCK: Self = Self(0x90);
    pub const SCROLL: Self = Self(0x91);
    pub const LEFT_SHIFT: Self = Self(0xA0);
    pub const RIGHT_SHIFT: Self = Self(0xA1);
    pub const LEFT_CONTROL: Self = Self(0xA2);
    pub const RIGHT_CONTROL: Self = Self(0xA3);
    pub const LEFT_MENU: Self = Self(0xA4);
    pub const RIGHT_MENU: Self = Self(0xA5);

    /// Returns the code `offset` positions after `self`.
    const fn offset(self, offset: usize) -> Self {
        Self(self.0 + offset as u16)
    }
}

impl From<u16> for VirtualKey {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

//=== Key Table ===========================================================

impl PlatformKeyCode for VirtualKey {
    /// Mapping for WinRT virtual keys.
    ///
    /// OEM and media keys have no engine counterpart and are left out. The
    /// side-agnostic `Shift`, `Control` and `Menu` codes resolve to the
    /// left-hand keys.
    fn key_table() -> Vec<(Self, Key)> {
        let mut table = vec![
            (Self::NONE, Key::None),
            (Self::BACK, Key::Back),
            (Self::TAB, Key::Tab),
            (Self::ENTER, Key::Enter),
            (Self::PAUSE, Key::Pause),
            (Self::CAPITAL_LOCK, Key::CapsLock),
            (Self::KANA, Key::KanaMode),
            (Self::KANJI, Key::KanjiMode),
            (Self::ESCAPE, Key::Escape),
            (Self::CONVERT, Key::ImeConvert),
            (Self::NON_CONVERT, Key::ImeNonConvert),
            (Self::SPACE, Key::Space),
            (Self::PAGE_UP, Key::PageUp),
            (Self::PAGE_DOWN, Key::PageDown),
            (Self::END, Key::End),
            (Self::HOME, Key::Home),
            (Self::LEFT, Key::Left),
            (Self::UP, Key::Up),
            (Self::RIGHT, Key::Right),
            (Self::DOWN, Key::Down),
            (Self::SELECT, Key::Select),
            (Self::PRINT, Key::Print),
            (Self::EXECUTE, Key::Execute),
            (Self::SNAPSHOT, Key::PrintScreen),
            (Self::INSERT, Key::Insert),
            (Self::DELETE, Key::Delete),
            (Self::HELP, Key::Help),
            (Self::LEFT_WINDOWS, Key::LeftWin),
            (Self::RIGHT_WINDOWS, Key::RightWin),
            (Self::APPLICATION, Key::Apps),
            (Self::SLEEP, Key::Sleep),
            (Self::MULTIPLY, Key::Multiply),
            (Self::ADD, Key::Add),
            (Self::SEPARATOR, Key::Separator),
            (Self::SUBTRACT, Key::Subtract),
            (Self::DECIMAL, Key::Decimal),
            (Self::DIVIDE, Key::Divide),
            (Self::NUMBER_KEY_LOCK, Key::NumLock),
            (Self::SCROLL, Key::Scroll),
            (Self::SHIFT, Key::LeftShift),
            (Self::LEFT_SHIFT, Key::LeftShift),
            (Self::RIGHT_SHIFT, Key::RightShift),
            (Self::CONTROL, Key::LeftCtrl),
            (Self::LEFT_CONTROL, Key::LeftCtrl),
            (Self::RIGHT_CONTROL, Key::RightCtrl),
            (Self::MENU, Key::LeftAlt),
            (Self::LEFT_MENU, Key::LeftAlt),
            (Self::RIGHT_MENU, Key::RightAlt),
        ];

        extend_range(&mut table, Self::NUMBER0, &Key::DIGITS);
        extend_range(&mut table, Self::A, &Key::LETTERS);
        extend_range(&mut table, Self::NUMBER_PAD0, &Key::NUMPAD);
        extend_range(&mut table, Self::F1, &Key::FUNCTION);

        table
    }
}

/// Appends `keys` mapped to consecutive codes starting at `first`.
fn extend_range(table: &mut Vec<(VirtualKey, Key)>, first: VirtualKey, keys: &[Key]) {
    table.extend(keys.iter().enumerate().map(|(i, key)| (first.offset(i), *key)));
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_unique_codes() {
        let table = VirtualKey::key_table();
        let codes: HashSet<_> = table.iter().map(|(code, _)| *code).collect();
        assert_eq!(codes.len(), table.len(), "Each virtual key should appear once");
    }

    #[test]
    fn contiguous_ranges_line_up() {
        let table: std::collections::HashMap<_, _> =
            VirtualKey::key_table().into_iter().collect();

        assert_eq!(table[&VirtualKey(0x39)], Key::D9);
        assert_eq!(table[&VirtualKey(0x5A)], Key::Z);
        assert_eq!(table[&VirtualKey(0x69)], Key::NumPad9);
        assert_eq!(table[&VirtualKey(0x87)], Key::F24);
    }

    #[test]
    fn from_u16() {
        assert_eq!(VirtualKey::from(0x20), VirtualKey::SPACE);
    }
}
