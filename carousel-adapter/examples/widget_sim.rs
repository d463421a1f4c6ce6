// Example: a stdout transport driven through a full interaction sequence.
use carousel::{ArrowKey, CarouselOptions};
use carousel_adapter::{Controller, Transport, dot_label, for_each_dot};

struct StdoutTransport;

impl Transport for StdoutTransport {
    fn apply_offset(&mut self, percent: f64) {
        println!("  transform: translateX({percent:.2}%)");
    }

    fn set_transition_enabled(&mut self, enabled: bool) {
        println!("  transition: {}", if enabled { "''" } else { "none" });
    }

    fn set_drag_hint(&mut self, dragging: bool) {
        println!("  is-dragging: {dragging}");
    }

    fn set_active_dot(&mut self, index: usize) {
        println!("  active dot: {index}");
    }
}

fn main() {
    let options = CarouselOptions::from_attrs(Some("3"), Some("5000"), Some("true"));
    let mut c = Controller::init(options, 6, 640.0, StdoutTransport, 0).expect("items present");

    println!("dots:");
    for_each_dot(c.carousel(), |d| {
        println!("  [{}] {} active={}", d.index, dot_label(d.index), d.active);
    });

    println!("next button:");
    c.on_next_click(100);

    println!("arrow left:");
    c.on_key(ArrowKey::Left, 200);

    println!("drag left past the threshold:");
    c.on_pointer_down(320.0, 300);
    c.on_pointer_move(240.0, 320);
    c.on_pointer_up(220.0, 340);

    println!("autoplay tick at t=5340:");
    c.tick(5340);
}
