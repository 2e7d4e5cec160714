//! Scroll reveal and animated statistic counters.
//!
//! Both use an `IntersectionObserver` fed into a [`RevealTracker`], so each
//! element fires at most once; the element is also unobserved on fire. If
//! the observer cannot be created, every element goes straight to its
//! terminal state.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::components::Component;
use crate::config::SiteConfig;
use crate::state::counter::{CounterAnimation, Easing, parse_target};
use crate::state::reveal::RevealTracker;
use crate::util::dom;
use crate::util::format::compact_count;
use crate::util::timer::Timer;

const REVEAL_SELECTOR: &str = ".reveal-on-scroll";
const REVEALED_CLASS: &str = "revealed";
const COUNTER_SELECTOR: &str = ".stat-number";
const TARGET_ATTR: &str = "data-target";
const EMPHASIS_CLASS: &str = "counted";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;
type FrameCallback = Closure<dyn FnMut(f64)>;

/// Observer that reports each watched element at most once.
struct OneShotObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl OneShotObserver {
    fn watch(elements: Vec<Element>, threshold: f64, on_fire: impl FnMut(&Element, usize) + 'static) -> Option<Self> {
        if elements.is_empty() {
            return None;
        }
        let mut tracker = RevealTracker::new();
        let watched: Vec<(Element, usize)> = elements
            .iter()
            .map(|element| (element.clone(), tracker.register()))
            .collect();
        let tracker = Rc::new(RefCell::new(tracker));

        let fire: Rc<RefCell<dyn FnMut(&Element, usize)>> = Rc::new(RefCell::new(on_fire));
        let callback = {
            let (tracker, fire) = (Rc::clone(&tracker), Rc::clone(&fire));
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some((_, key)) = watched.iter().find(|(element, _)| *element == target) else {
                        continue;
                    };
                    if tracker.borrow_mut().notify(*key, entry.is_intersecting()) {
                        observer.unobserve(&target);
                        (&mut *fire.borrow_mut())(&target, *key);
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let Some(observer) = dom::report(
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init),
            "IntersectionObserver",
        ) else {
            for (key, element) in elements.iter().enumerate() {
                if tracker.borrow_mut().notify(key, true) {
                    (&mut *fire.borrow_mut())(element, key);
                }
            }
            return None;
        };
        for element in &elements {
            observer.observe(element);
        }
        Some(Self { observer, _callback: callback })
    }
}

impl Drop for OneShotObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// The outstanding `requestAnimationFrame` request for one counter and the
/// callback it will invoke.
#[derive(Default)]
struct FrameLoop {
    request: Option<i32>,
    callback: Option<FrameCallback>,
}

/// A counter that has been handed to the frame loop.
struct RunningCounter {
    animation: Rc<RefCell<CounterAnimation>>,
    frames: Rc<RefCell<FrameLoop>>,
}

impl RunningCounter {
    fn cancel(&self) {
        self.animation.borrow_mut().cancel();
        let mut frames = self.frames.borrow_mut();
        if let (Some(request), Some(window)) = (frames.request.take(), web_sys::window()) {
            dom::report(window.cancel_animation_frame(request), "cancelAnimationFrame");
        }
        frames.callback = None;
    }
}

fn request_frame(frames: &RefCell<FrameLoop>) {
    let request = {
        let frames = frames.borrow();
        match (web_sys::window(), frames.callback.as_ref()) {
            (Some(window), Some(cb)) => {
                dom::report(window.request_animation_frame(cb.as_ref().unchecked_ref()), "requestAnimationFrame")
            }
            _ => None,
        }
    };
    frames.borrow_mut().request = request;
}

/// Drive `animation` on `element` with `requestAnimationFrame` until it
/// settles or is cancelled.
fn animate_counter(element: Element, animation: CounterAnimation, on_settled: impl FnOnce(&Element) + 'static) -> RunningCounter {
    let running = RunningCounter {
        animation: Rc::new(RefCell::new(animation)),
        frames: Rc::new(RefCell::new(FrameLoop::default())),
    };
    if web_sys::window().is_none() {
        element.set_text_content(Some(&compact_count(running.animation.borrow().target())));
        return running;
    }

    let animation = Rc::clone(&running.animation);
    let frames_for_cb = Rc::clone(&running.frames);
    let mut on_settled = Some(on_settled);
    let cb = Closure::wrap(Box::new(move |now: f64| {
        let frame = {
            let mut animation = animation.borrow_mut();
            animation.start(now);
            animation.sample(now)
        };
        let Some(frame) = frame else {
            let mut frames = frames_for_cb.borrow_mut();
            frames.request = None;
            frames.callback.take();
            return;
        };
        element.set_text_content(Some(&compact_count(frame.value)));
        if frame.settled {
            if let Some(settled) = on_settled.take() {
                settled(&element);
            }
            let mut frames = frames_for_cb.borrow_mut();
            frames.request = None;
            frames.callback.take();
            return;
        }
        request_frame(&frames_for_cb);
    }) as Box<dyn FnMut(f64)>);

    running.frames.borrow_mut().callback = Some(cb);
    request_frame(&running.frames);
    running
}

pub struct RevealAnimator {
    observers: Vec<OneShotObserver>,
    running: Rc<RefCell<Vec<RunningCounter>>>,
    emphasis: Rc<RefCell<Vec<Timer>>>,
}

impl RevealAnimator {
    pub fn mount(document: &Document, config: &SiteConfig) -> Option<Self> {
        let mut observers = Vec::new();

        let reveal = OneShotObserver::watch(
            dom::query_all(document, REVEAL_SELECTOR),
            config.reveal_threshold,
            |element, _| dom::set_class(element, REVEALED_CLASS, true),
        );
        observers.extend(reveal);

        let mut counters = Vec::new();
        let mut targets = Vec::new();
        for element in dom::query_all(document, COUNTER_SELECTOR) {
            let raw = element.get_attribute(TARGET_ATTR).unwrap_or_default();
            match parse_target(&raw) {
                Some(target) => {
                    counters.push(element);
                    targets.push(target);
                }
                None => log::warn!("skipping counter with malformed {TARGET_ATTR}=\"{raw}\""),
            }
        }

        let running: Rc<RefCell<Vec<RunningCounter>>> = Rc::new(RefCell::new(Vec::new()));
        let emphasis: Rc<RefCell<Vec<Timer>>> =
            Rc::new(RefCell::new(targets.iter().map(|_| Timer::new()).collect()));
        let duration_ms = config.counter_duration_ms;
        let emphasis_ms = config.counter_emphasis_ms;
        let counter_observer = {
            let (running, emphasis) = (Rc::clone(&running), Rc::clone(&emphasis));
            OneShotObserver::watch(counters, config.counter_threshold, move |element, key| {
                let Some(target) = targets.get(key).copied() else {
                    return;
                };
                let animation = CounterAnimation::new(target, duration_ms, Easing::EaseOutCubic);
                let emphasis = Rc::clone(&emphasis);
                let counter = animate_counter(element.clone(), animation, move |element| {
                    dom::set_class(element, EMPHASIS_CLASS, true);
                    let settled = element.clone();
                    if let Some(timer) = emphasis.borrow_mut().get_mut(key) {
                        timer.schedule(emphasis_ms, move || dom::set_class(&settled, EMPHASIS_CLASS, false));
                    }
                });
                running.borrow_mut().push(counter);
            })
        };
        observers.extend(counter_observer);

        if observers.is_empty() {
            return None;
        }
        Some(Self { observers, running, emphasis })
    }
}

impl Component for RevealAnimator {
    fn name(&self) -> &'static str {
        "reveal"
    }

    fn teardown(&mut self) {
        self.observers.clear();
        for counter in self.running.borrow_mut().drain(..) {
            counter.cancel();
        }
        for timer in self.emphasis.borrow_mut().iter_mut() {
            timer.cancel();
        }
    }
}
