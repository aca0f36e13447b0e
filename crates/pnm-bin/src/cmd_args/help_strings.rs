pub static PIXEL_HELP: &str = "Set pixel size

Every image pixel is drawn as a square of this many
screen pixels. Must be at least 1";

pub static ROTATE_HELP: &str = "Rotate the image

One of 0, 90, 180 or 270. Pressing r in the window
moves to the next rotation, wrapping from 270 back to 0";

pub static CONVERT_HELP: &str = "Convert the image instead of showing it

The target is a format tag, P1 to P6.
P1 and P4 write a bilevel .pbm, P2 and P5 a grayscale .pgm,
P3 and P6 a color .ppm. Odd tags are ASCII, even tags binary.

The file is written to the current directory using the
name given by --output, it is never overwritten";
