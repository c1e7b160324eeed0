use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_tictactoe::core::{Board, GameController, GameSnapshot};
use tui_tictactoe::term::{BoardView, FrameBuffer, Viewport};
use tui_tictactoe::types::{Player, ScreenPoint, Size};

const SURFACE: Size = Size::new(300, 300);

const TIE: [(usize, usize); 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 1),
    (1, 0),
    (2, 0),
    (2, 1),
    (1, 2),
    (2, 2),
];

fn point(row: usize, col: usize) -> ScreenPoint {
    ScreenPoint::new(col as u16 * 100 + 50, row as u16 * 100 + 50)
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("play_tie_game", |b| {
        b.iter(|| {
            let mut game = GameController::new(SURFACE);
            for &(row, col) in &TIE {
                game.handle_select(black_box(point(row, col)));
            }
            game.status()
        })
    });
}

fn bench_apply_and_check(c: &mut Criterion) {
    c.bench_function("apply_then_check_win", |b| {
        b.iter(|| {
            let mut board = Board::new(SURFACE);
            let mut player = Player::X;
            for &(row, col) in &TIE {
                let _ = board.apply(row, col, player);
                black_box(board.check_win());
                player = player.opponent();
            }
        })
    });
}

fn bench_locate(c: &mut Criterion) {
    let board = Board::new(Size::new(500, 400));

    c.bench_function("locate_bottom_right", |b| {
        b.iter(|| board.locate(black_box(ScreenPoint::new(499, 399))))
    });
}

fn bench_occupied_click(c: &mut Criterion) {
    let mut game = GameController::new(SURFACE);
    game.handle_select(point(1, 1));

    c.bench_function("occupied_click_flash", |b| {
        b.iter(|| {
            game.handle_select(black_box(point(1, 1)));
            game.end_frame();
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let view = BoardView::default();
    let vp = Viewport::new(120, 40);
    let mut game = GameController::new(view.board_surface(vp));
    for &(row, col) in &TIE[..5] {
        game.handle_select(ScreenPoint::new(col as u16 * 40 + 2, row as u16 * 13 + 2));
    }
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("render_board_120x40", |b| {
        b.iter(|| {
            game.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), vp, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_full_game,
    bench_apply_and_check,
    bench_locate,
    bench_occupied_click,
    bench_render
);
criterion_main!(benches);
