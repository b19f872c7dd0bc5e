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
    #[arg(short, long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 360)]
    height: u32,

    #[arg(short, long, default_value_t = 1)]
    antialias: u32,

    #[arg(short, long, default_value_t = 120)]
    frames: u32,

    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// camera orbit speed, radians per second, 0 keeps it fixed
    #[arg(long, default_value_t = 0.0)]
    orbit: f64,

    #[arg(long, default_value_t = 75.0)]
    fov: f64,

    #[arg(short, long, default_value = "frames")]
    out_dir: String,
}

fn main() {
    let args = Args::parse();

    std::fs::create_dir_all(&args.out_dir).unwrap();

    let w = args.width;
    let h = args.height;
    let aspect = w as f64 / h as f64;
    let start = Instant::now();

    for frame in 0..args.frames {
        let time = frame as f64 / args.fps;
        let theta = args.orbit * time;
        let eye = v(5. * theta.sin(), 0., 5. * theta.cos());
        let camera = Camera::look_at(eye, O, B2, args.fov, aspect, 0.1, 1000.);
        let uniforms = Uniforms {
            time,
            ..Uniforms::default()
        };

        let frame_start = Instant::now();
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

        let path = format!("{}/frame_{:04}.png", args.out_dir, frame);
        img.save(&path).unwrap();
        println!(
            "frame {}/{} ({} s)",
            frame + 1,
            args.frames,
            frame_start.elapsed().as_secs_f32()
        );
    }

    println!("Rendered {} frames in {} s", args.frames, start.elapsed().as_secs_f32());
}
