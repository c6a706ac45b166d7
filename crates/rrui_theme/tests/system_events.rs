//! Host events forwarded through the dispatcher to a provider and an optimizer

use rrui_core::{Appearance, Bundle, SystemEvent, SystemEventDispatcher, SystemEventKind};
use rrui_theme::{ColorScheme, PerformanceOptimizer, Theme, ThemeProvider};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn dispatcher_drives_provider_and_optimizer() {
    let bundle = Bundle::new("com.example.app");
    let provider = Rc::new(RefCell::new(ThemeProvider::with_bundle(bundle.clone())));
    let optimizer = Rc::new(RefCell::new(PerformanceOptimizer::with_defaults()));

    let mut dispatcher = SystemEventDispatcher::new();
    let p = provider.clone();
    dispatcher.register(SystemEventKind::AppearanceChanged, move |event| {
        p.borrow_mut().handle_system_event(event);
    });
    let o = optimizer.clone();
    dispatcher.register(SystemEventKind::LowMemory, move |event| {
        o.borrow_mut().handle_system_event(event);
    });

    optimizer
        .borrow_mut()
        .get_cached_theme("Dark", &bundle, ColorScheme::Dark);
    assert_eq!(optimizer.borrow().cache_sizes().themes, 1);

    dispatcher.dispatch(&SystemEvent::AppearanceChanged(Appearance::Dark));
    assert_eq!(provider.borrow().current_theme(), &Theme::dark(&bundle));
    assert_eq!(provider.borrow().color_scheme(), Appearance::Dark);

    dispatcher.dispatch(&SystemEvent::LowMemory);
    assert_eq!(optimizer.borrow().cache_sizes().total(), 0);
    assert_eq!(provider.borrow().current_theme().name(), "Dark");
}
