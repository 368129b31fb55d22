//! Quad-tree decomposition regression test
//!
//! Covers:
//! 1. Flat and two-level luma images at the minimum window size
//! 2. Odd intermediate node sizes with a minimum node dimension of 1
//! 3. Windows inside a larger strided buffer (offset + stride)
//! 4. Reuse of a previous result, determinism and lineage
//!
//! Run with:
//! ```
//! cargo test -p quadvar-region --test decompose_reg
//! ```

use quadvar_core::{PixelFormat, Rect};
use quadvar_region::{DecomposerOptions, NodeList, QuadTreeDecomposer, verify_tiling};
use quadvar_test::{RegParams, luma_image, rgb_image};

/// Smooth synthetic 8-bit pattern with spatial variation
fn wave(x: u32, y: u32, width: u32, height: u32) -> u32 {
    let fx = x as f32 / width as f32;
    let fy = y as f32 / height as f32;
    let val = 128.0
        + 60.0 * (fx * std::f32::consts::TAU).sin()
        + 40.0 * (fy * 2.0 * std::f32::consts::TAU).cos();
    val.clamp(0.0, 255.0) as u32
}

fn luma_options(min_node_dim: u32) -> DecomposerOptions {
    DecomposerOptions::new()
        .with_format(PixelFormat::Luma)
        .with_min_node_dim(min_node_dim)
}

#[test]
fn decompose_flat_images() {
    let mut rp = RegParams::new("decompose_flat");

    // --- Constant 16x16 luma, variance target 0 ---
    let buf = luma_image(16, 16, |_, _| 100);
    let d = QuadTreeDecomposer::with_options(16, 16, &luma_options(8)).expect("decomposer");
    let mut nodes = NodeList::new();
    let stats = d
        .decompose_by_variance(&mut nodes, &buf, 0)
        .expect("decompose_by_variance");

    rp.compare_values(4.0, nodes.len() as f64, 0.0);
    rp.compare_values(0.0, stats.splits as f64, 0.0);
    rp.compare_rects(&Rect::new_unchecked(0, 0, 16, 16).quarter(), &nodes.rects());
    for node in nodes.iter() {
        rp.compare_values(8.0, node.w() as f64, 0.0);
        rp.compare_values(8.0, node.h() as f64, 0.0);
        rp.compare_values(0.0, node.variance() as f64, 0.0);
    }
    rp.compare_tiling(&nodes.rects(), d.bounds());

    // --- Top-left quadrant 0, rest 255, node budget 4 ---
    let buf = luma_image(16, 16, |x, y| if x < 8 && y < 8 { 0 } else { 255 });
    let mut nodes = NodeList::new();
    let stats = d
        .decompose_by_count(&mut nodes, &buf, 4)
        .expect("decompose_by_count");

    rp.compare_values(4.0, nodes.len() as f64, 0.0);
    rp.compare_values(1.0, if stats.seeded { 1.0 } else { 0.0 }, 0.0);
    for node in nodes.iter() {
        eprintln!("  {}", node);
        rp.compare_values(0.0, node.variance() as f64, 0.0);
        rp.compare_values(1.0, if node.is_root() { 1.0 } else { 0.0 }, 0.0);
    }
    rp.compare_tiling(&nodes.rects(), d.bounds());

    assert!(rp.cleanup(), "decompose flat test failed");
}

#[test]
fn decompose_odd_sizes() {
    let mut rp = RegParams::new("decompose_odd");

    // Roots are 15x9, so every later split has odd sides
    let (w, h) = (30u32, 18u32);
    let buf = luma_image(w, h, |x, y| (x * 37 + y * 91) % 256);
    let d = QuadTreeDecomposer::with_options(w, h, &luma_options(1)).expect("decomposer");

    let mut nodes = NodeList::new();
    d.decompose_by_variance(&mut nodes, &buf, 0)
        .expect("decompose_by_variance");
    eprintln!("  {} nodes", nodes.len());

    rp.compare_tiling(&nodes.rects(), d.bounds());
    rp.compare_values(
        1.0,
        if verify_tiling(&nodes, d.bounds()).is_ok() { 1.0 } else { 0.0 },
        0.0,
    );
    let has_odd = nodes.iter().any(|n| n.w() % 2 == 1 || n.h() % 2 == 1);
    rp.compare_values(1.0, if has_odd { 1.0 } else { 0.0 }, 0.0);

    // Every remaining node is flat or a single column/row
    for node in nodes.iter() {
        let ok = node.variance() == 0 || node.w() <= 1 || node.h() <= 1;
        rp.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0);
    }

    // Children never outgrow their parents
    for &id in nodes.ids() {
        let node = nodes.get(id).expect("leaf");
        if let Some(parent) = nodes.parent(node) {
            let ok = parent.rect().contains_rect(&node.rect())
                && parent.w() > 1
                && parent.h() > 1;
            rp.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0);
        }
    }

    assert!(rp.cleanup(), "decompose odd sizes test failed");
}

#[test]
fn decompose_strided_window() {
    let mut rp = RegParams::new("decompose_strided");

    // 32x24 window at (8, 4) inside a 48-sample-wide buffer with noisy padding
    let (stride, rows) = (48u32, 32u32);
    let (x0, y0, w, h) = (8u32, 4u32, 32u32, 24u32);
    let full = rgb_image(stride, rows, |x, y| {
        if x >= x0 && x < x0 + w && y >= y0 && y < y0 + h {
            let v = wave(x - x0, y - y0, w, h) as u8;
            (v, v / 2, 255 - v)
        } else {
            ((x * 53 % 256) as u8, (y * 29 % 256) as u8, 7)
        }
    });
    let window = rgb_image(w, h, |x, y| {
        let v = wave(x, y, w, h) as u8;
        (v, v / 2, 255 - v)
    });

    let opts = DecomposerOptions::new()
        .with_stride(stride)
        .with_offset((y0 * stride + x0) as usize)
        .with_min_node_dim(2);
    let strided = QuadTreeDecomposer::with_options(w, h, &opts).expect("strided decomposer");
    let tight = QuadTreeDecomposer::with_options(w, h, &DecomposerOptions::new().with_min_node_dim(2))
        .expect("tight decomposer");
    rp.compare_rects(&[Rect::new_unchecked(x0, y0, w, h)], &[strided.bounds()]);

    let mut a = NodeList::new();
    strided
        .decompose_by_count(&mut a, &full, 40)
        .expect("strided decomposition");
    let mut b = NodeList::new();
    tight
        .decompose_by_count(&mut b, &window, 40)
        .expect("tight decomposition");

    rp.compare_tiling(&a.rects(), strided.bounds());
    rp.compare_values(b.len() as f64, a.len() as f64, 0.0);

    // Same decomposition, shifted by the window origin
    let shifted: Vec<Rect> = b
        .rects()
        .into_iter()
        .map(|r| Rect::new_unchecked(r.x + x0, r.y + y0, r.w, r.h))
        .collect();
    rp.compare_rects(&shifted, &a.rects());

    assert!(rp.cleanup(), "decompose strided test failed");
}

#[test]
fn decompose_reuse_and_determinism() {
    let mut rp = RegParams::new("decompose_reuse");

    let (w, h) = (64u32, 48u32);
    let buf = luma_image(w, h, |x, y| wave(x, y, w, h));
    let d = QuadTreeDecomposer::with_options(w, h, &luma_options(4)).expect("decomposer");

    // --- Two independent runs agree ---
    let mut first = NodeList::new();
    d.decompose_by_variance(&mut first, &buf, 20).expect("run 1");
    let mut second = NodeList::new();
    d.decompose_by_variance(&mut second, &buf, 20).expect("run 2");
    rp.compare_rects(&first.rects(), &second.rects());
    rp.compare_tiling(&first.rects(), d.bounds());

    // --- Running again on a finished result changes nothing ---
    let before = first.rects();
    let stats = d
        .decompose_by_variance(&mut first, &buf, 20)
        .expect("rerun");
    rp.compare_values(0.0, stats.splits as f64, 0.0);
    rp.compare_values(0.0, if stats.seeded { 1.0 } else { 0.0 }, 0.0);
    rp.compare_rects(&before, &first.rects());

    // --- A count-limited result can be refined by variance ---
    let mut nodes = NodeList::new();
    d.decompose_by_count(&mut nodes, &buf, 10).expect("coarse");
    let coarse = nodes.len();
    d.decompose_by_variance(&mut nodes, &buf, 20).expect("refine");
    rp.compare_values(1.0, if nodes.len() >= coarse { 1.0 } else { 0.0 }, 0.0);
    rp.compare_rects(&first.rects(), &nodes.rects());
    rp.compare_tiling(&nodes.rects(), d.bounds());

    // Lineage of every leaf ends at a root quadrant of the window
    let roots = d.bounds().quarter();
    for &id in nodes.ids() {
        let top = nodes
            .ancestors(id)
            .last()
            .or_else(|| nodes.get(id))
            .expect("node");
        rp.compare_values(1.0, if roots.contains(&top.rect()) { 1.0 } else { 0.0 }, 0.0);
    }

    assert!(rp.cleanup(), "decompose reuse test failed");
}
