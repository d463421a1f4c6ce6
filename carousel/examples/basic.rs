// Example: minimal usage, autoplay ticking, and keyboard navigation.
use carousel::{ArrowKey, Carousel, CarouselOptions};

fn main() {
    let mut c = Carousel::new(
        CarouselOptions::new()
            .with_items_per_page(3)
            .with_autoplay_interval_ms(1000)
            .with_loop_enabled(true),
        6,
    );
    c.start_autoplay(0);

    println!("pages={}", c.page_count());
    for now_ms in [500u64, 1000, 1500, 2000] {
        let fired = c.tick(now_ms);
        println!(
            "t={now_ms} fired={fired} index={} offset={:.2}%",
            c.current_index(),
            c.offset_percent()
        );
    }

    c.handle_key(ArrowKey::Left, 2000);
    println!("after ArrowLeft: index={}", c.current_index());
}
