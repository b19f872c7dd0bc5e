use clap::Parser;
use image::{ImageBuffer, Rgba};
use marcher::camera::Camera;
use marcher::marcher::{render, Uniforms};
use marcher::math::{v, B2, O, V4};
use rand::{thread_rng, Rng};
use rayon::prelude::*;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 960)]
    width: u32,

    #[arg(long, default_value_t = 540)]
    height: u32,

    #[arg(short, long, default_value_t = 2)]
    antialias: u32,

    #[arg(short, long, default_value_t = 0.0)]
    time: f64,

    #[arg(short, long, default_value_t = 75.0)]
    fov: f64,

    #[arg(short, long, default_value = "out.png")]
    out: String,
}

fn main() {
    let args = Args::parse();

    let w = args.width;
    let h = args.height;
    let aspect = w as f64 / h as f64;
    let camera = Camera::look_at(v(0., 0., 5.), O, B2, args.fov, aspect, 0.1, 1000.);
    let uniforms = Uniforms {
        time: args.time,
        ..Uniforms::default()
    };

    println!("Rendering {}x{} at t={}", w, h, args.time);
    let start = Instant::now();

    let mut img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::new(w, h);
    img.par_chunks_mut(4)
        .enumerate()
        .map(|(i, p)| (i as u32 % w, i as u32 / w, p))
        .for_each(|(x, y, p)| {
            let aa = args.antialias;
            let mut rng = thread_rng();
            let mut sum = V4 {
                x: 0.,
                y: 0.,
                z: 0.,
                w: 0.,
            };
            for sx in 0..aa {
                for sy in 0..aa {
                    // jitter inside the subpixel cell
                    let ju = (sx as f64 + rng.gen::<f64>()) / aa as f64;
                    let jv = (sy as f64 + rng.gen::<f64>()) / aa as f64;
                    let su = (x as f64 + ju) / w as f64;
                    let sv = 1. - (y as f64 + jv) / h as f64;
                    sum = sum + render(&camera, (su, sv), &uniforms);
                }
            }
            let c = 1. / (aa as f64 * aa as f64) * sum;
            p[0] = (c.x.clamp(0., 1.) * 255.) as u8;
            p[1] = (c.y.clamp(0., 1.) * 255.) as u8;
            p[2] = (c.z.clamp(0., 1.) * 255.) as u8;
            p[3] = (c.w.clamp(0., 1.) * 255.) as u8;
        });

    println!("Render took {} s", start.elapsed().as_secs_f32());
    img.save(args.out).unwrap()
}
