use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mandelbrot_zoom::adapters::pixel_format::{blit_placement, xrgb_to_rgba};
use mandelbrot_zoom::core::data::point::Point;
use mandelbrot_zoom::core::zoom::preview::placement_between;
use mandelbrot_zoom::{PixelBuffer, PlaneRegion, Viewport, render_mandelbrot};

fn bench_copy(c: &mut Criterion) {
    let viewport = Viewport::new(600, 600).unwrap();
    let live = PlaneRegion::new(-1.0, 1.0, -1.0, 1.0).unwrap();
    let mut buffer = PixelBuffer::new(viewport).unwrap();
    render_mandelbrot(&live, &mut buffer);
    let mut frame = vec![0u8; viewport.pixel_count() * 4];

    let anchor = Point::new(420, 180);
    let zoom_in = placement_between(&live, &live.zoomed(0.9, anchor, viewport).unwrap(), viewport);
    let zoom_out = placement_between(&live, &live.zoomed(1.2, anchor, viewport).unwrap(), viewport);

    c.bench_function("xrgb_to_rgba", |b| {
        b.iter(|| xrgb_to_rgba(black_box(buffer.pixels()), &mut frame))
    });
    c.bench_function("blit_identity", |b| {
        b.iter(|| blit_placement(black_box(&buffer), None, &mut frame))
    });
    c.bench_function("blit_zoom_in", |b| {
        b.iter(|| blit_placement(black_box(&buffer), zoom_in, &mut frame))
    });
    c.bench_function("blit_zoom_out", |b| {
        b.iter(|| blit_placement(black_box(&buffer), zoom_out, &mut frame))
    });
}

criterion_group!(benches, bench_copy);
criterion_main!(benches);
