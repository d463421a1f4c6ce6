// Example: feeding a pointer drag through the gesture state machine.
use carousel::{Carousel, CarouselOptions, GestureEvent};

fn main() {
    let mut c = Carousel::new(CarouselOptions::new().with_loop_enabled(true), 4);
    c.set_container_width(300.0);
    c.go_to(1);

    c.handle_gesture(GestureEvent::Down { x: 100.0 }, 0);
    for x in [110.0, 125.0, 140.0] {
        let fx = c.handle_gesture(GestureEvent::Move { x }, 0);
        println!("preview pages={:?}", fx.preview_pages);
    }

    // 40px rightward over 300px clears the 12% threshold: commit to prev.
    let fx = c.handle_gesture(GestureEvent::Up { x: 140.0 }, 0);
    println!("commit={:?} index={}", fx.commit, c.current_index());
}
