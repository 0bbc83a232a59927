//=========================================================================
// Winit Key Table
//=========================================================================
//
// Physical winit key codes → engine keys.
//
// Physical codes identify key positions, so layout-dependent characters
// never reach the mapper. Keys without an engine counterpart (media keys,
// punctuation, F25+) map to `Key::None`.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::keyboard::KeyCode as WinitKeyCode;

//=== Internal Dependencies ===============================================

use crate::core::input::{Key, PlatformKeyCode};

//=== PlatformKeyCode =====================================================

impl PlatformKeyCode for WinitKeyCode {
    fn key_table() -> Vec<(Self, Key)> {
        use WinitKeyCode::*;

        let digits = [
            Digit0, Digit1, Digit2, Digit3, Digit4, Digit5, Digit6, Digit7, Digit8, Digit9,
        ];
        let letters = [
            KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI, KeyJ, KeyK, KeyL, KeyM,
            KeyN, KeyO, KeyP, KeyQ, KeyR, KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,
        ];
        let numpad = [
            Numpad0, Numpad1, Numpad2, Numpad3, Numpad4, Numpad5, Numpad6, Numpad7, Numpad8,
            Numpad9,
        ];
        let function = [
            F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
            F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24,
        ];

        let mut table = vec![
            //--- Editing & Control ------------------------------------------
            (Backspace, Key::Back),
            (Tab, Key::Tab),
            (Enter, Key::Enter),
            (NumpadEnter, Key::Enter),
            (Pause, Key::Pause),
            (CapsLock, Key::CapsLock),
            (Escape, Key::Escape),
            (Space, Key::Space),
            (PrintScreen, Key::PrintScreen),
            (Insert, Key::Insert),
            (Delete, Key::Delete),
            (Help, Key::Help),
            (ContextMenu, Key::Apps),
            (Sleep, Key::Sleep),

            //--- IME ----------------------------------------------------------
            (KanaMode, Key::KanaMode),
            (Convert, Key::ImeConvert),
            (NonConvert, Key::ImeNonConvert),

            //--- Navigation ---------------------------------------------------
            (PageUp, Key::PageUp),
            (PageDown, Key::PageDown),
            (End, Key::End),
            (Home, Key::Home),
            (ArrowLeft, Key::Left),
            (ArrowUp, Key::Up),
            (ArrowRight, Key::Right),
            (ArrowDown, Key::Down),

            //--- Numpad Operators ---------------------------------------------
            (NumpadMultiply, Key::Multiply),
            (NumpadAdd, Key::Add),
            (NumpadComma, Key::Separator),
            (NumpadSubtract, Key::Subtract),
            (NumpadDecimal, Key::Decimal),
            (NumpadDivide, Key::Divide),

            //--- Locks --------------------------------------------------------
            (NumLock, Key::NumLock),
            (ScrollLock, Key::Scroll),

            //--- Modifiers ----------------------------------------------------
            (ShiftLeft, Key::LeftShift),
            (ShiftRight, Key::RightShift),
            (ControlLeft, Key::LeftCtrl),
            (ControlRight, Key::RightCtrl),
            (AltLeft, Key::LeftAlt),
            (AltRight, Key::RightAlt),
            (SuperLeft, Key::LeftWin),
            (SuperRight, Key::RightWin),
        ];

        table.extend(digits.into_iter().zip(Key::DIGITS));
        table.extend(letters.into_iter().zip(Key::LETTERS));
        table.extend(numpad.into_iter().zip(Key::NUMPAD));
        table.extend(function.into_iter().zip(Key::FUNCTION));

        table
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
