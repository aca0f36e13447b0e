/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pnm_core::{ImageRecord, Rotation};

use crate::errors::WorkflowError;

/// Sizes of the pixel buffer and of the window showing it
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FrameSize {
    pub buffer_width:  u32,
    pub buffer_height: u32,
    pub window_width:  u32,
    pub window_height: u32
}

impl FrameSize {
    /// Every image pixel becomes a `pixel_size` square in the window
    pub fn new(image: &ImageRecord, pixel_size: u32) -> Result<FrameSize, WorkflowError> {
        let too_large = || {
            WorkflowError::Window(format!(
                "a {}x{} image at pixel size {} does not fit in a window",
                image.width(),
                image.height(),
                pixel_size
            ))
        };
        let buffer_width = u32::try_from(image.width()).map_err(|_| too_large())?;
        let buffer_height = u32::try_from(image.height()).map_err(|_| too_large())?;

        Ok(FrameSize {
            buffer_width,
            buffer_height,
            window_width: buffer_width.checked_mul(pixel_size).ok_or_else(too_large)?,
            window_height: buffer_height.checked_mul(pixel_size).ok_or_else(too_large)?
        })
    }
}

/// Copy the image into an RGBA frame of the same dimensions
pub fn fill_frame(frame: &mut [u8], image: &ImageRecord) {
    for (rgba, pixel) in frame.chunks_exact_mut(4).zip(image.pixels()) {
        rgba[..3].copy_from_slice(pixel);
        rgba[3] = 0xff;
    }
}

#[cfg(feature = "gui")]
fn window_title(rotation: Rotation) -> String {
    format!("pnmview ({rotation}°)")
}

#[cfg(feature = "gui")]
pub fn show_image(
    image: ImageRecord, pixel_size: u32, rotation: Rotation
) -> Result<(), WorkflowError> {
    use log::{debug, error, info};
    use pixels::{Pixels, SurfaceTexture};
    use winit::dpi::PhysicalSize;
    use winit::event::{Event, WindowEvent};
    use winit::event_loop::EventLoop;
    use winit::window::WindowBuilder;

    let window_error = |x: &dyn std::fmt::Display| WorkflowError::Window(x.to_string());

    let mut rotation = rotation;
    let mut shown = image.rotated(rotation);
    let mut size = FrameSize::new(&shown, pixel_size)?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(window_title(rotation))
        .with_inner_size(PhysicalSize::new(size.window_width, size.window_height))
        .with_resizable(false)
        .build(&event_loop)
        .map_err(|x| window_error(&x))?;

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(size.buffer_width, size.buffer_height, surface_texture)
            .map_err(|x| window_error(&x))?
    };
    fill_frame(pixels.frame_mut(), &shown);

    info!("Showing image at rotation {}, press r to rotate", rotation);

    event_loop.run(move |event, _, control_flow| {
        control_flow.set_wait();

        match event {
            Event::RedrawRequested(_) => {
                if let Err(err) = pixels.render() {
                    error!("Could not render image: {err}");
                    control_flow.set_exit();
                }
            }
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    debug!("Window closed");
                    control_flow.set_exit();
                }
                WindowEvent::ReceivedCharacter('r' | 'R') => {
                    rotation = rotation.next();
                    shown = image.rotated(rotation);

                    let resized = FrameSize::new(&shown, pixel_size).and_then(|new_size| {
                        pixels
                            .resize_buffer(new_size.buffer_width, new_size.buffer_height)
                            .map_err(|x| window_error(&x))?;
                        pixels
                            .resize_surface(new_size.window_width, new_size.window_height)
                            .map_err(|x| window_error(&x))?;
                        Ok(new_size)
                    });
                    match resized {
                        Ok(new_size) => size = new_size,
                        Err(err) => {
                            error!("{err}");
                            control_flow.set_exit();
                            return;
                        }
                    }
                    debug!("Rotated to {}, now {:?}", rotation, size);

                    window.set_inner_size(PhysicalSize::new(size.window_width, size.window_height));
                    window.set_title(&window_title(rotation));
                    fill_frame(pixels.frame_mut(), &shown);
                    window.request_redraw();
                }
                WindowEvent::Resized(new_size) => {
                    if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                        error!("Could not resize surface: {err}");
                        control_flow.set_exit();
                    }
                }
                _ => ()
            },
            _ => ()
        }
    })
}

#[cfg(not(feature = "gui"))]
pub fn show_image(
    _image: ImageRecord, _pixel_size: u32, _rotation: Rotation
) -> Result<(), WorkflowError> {
    Err(WorkflowError::GenericString(String::from(
        "pnmview was built without the gui feature, use -information or -convert"
    )))
}
