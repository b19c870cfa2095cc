use crate::traits::StaticEvent;
use wasm_bindgen::JsCast;


macro_rules! make_event {
    ($name:ident, $type:literal => $event:path) => {
        pub struct $name {
            event: $event,
        }

        impl StaticEvent for $name {
            const EVENT_TYPE: &'static str = $type;

            #[inline]
            fn unchecked_from_event(event: web_sys::Event) -> Self {
                Self {
                    event: event.unchecked_into(),
                }
            }
        }

        impl $name {
            #[inline] pub fn prevent_default(&self) { self.event.prevent_default(); }
        }
    };
}

make_event!(Click, "click" => web_sys::MouseEvent);

make_event!(Submit, "submit" => web_sys::Event);
make_event!(Input, "input" => web_sys::InputEvent);
