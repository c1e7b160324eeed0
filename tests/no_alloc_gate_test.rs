use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_tictactoe::core::{GameController, GameSnapshot};
use tui_tictactoe::term::{BoardView, FrameBuffer, Viewport};
use tui_tictactoe::types::ScreenPoint;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// One test per binary: the counter is global.
#[test]
fn frame_hot_path_does_not_allocate() {
    let view = BoardView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut game = GameController::new(view.board_surface(viewport));
    let mut snap = GameSnapshot::default();

    // Cells are 26x7; these points walk every cell in a tie order.
    let clicks = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (2, 0),
        (2, 1),
        (1, 2),
        (2, 2),
    ]
    .map(|(row, col): (u16, u16)| ScreenPoint::new(col * 26 + 3, row * 7 + 3));

    // Warm-up (first-use callsite registration, framebuffer sizing).
    game.handle_select(clicks[0]);
    game.handle_select(clicks[0]);
    game.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut fb);
    game.end_frame();
    game.reset();

    let allocs = with_alloc_counting(|| {
        for _ in 0..20 {
            for &p in &clicks {
                game.handle_select(p);
                // Second click on the same cell flashes it.
                game.handle_select(p);
                game.snapshot_into(&mut snap);
                view.render_into(&snap, viewport, &mut fb);
                game.end_frame();
            }
            game.reset();
        }
    });

    assert_eq!(allocs, 0);
}
