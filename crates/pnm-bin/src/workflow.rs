use std::path::Path;

use log::{debug, info};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::WorkflowError;
use crate::file_io::PnmFile;
use crate::probe_files::probe_input_file;
use crate::show_gui::show_image;

pub(crate) fn create_and_exec_workflow_from_cmd(cmd_opts: &CmdOptions) -> Result<(), WorkflowError> {
    info!("Creating workflow from input");

    exec_workflow(cmd_opts, Path::new(""))
}

/// Run the command line request, converted files are written in `output_dir`
fn exec_workflow(cmd_opts: &CmdOptions, output_dir: &Path) -> Result<(), WorkflowError> {
    verify_file_path(&cmd_opts.file)?;

    let file = PnmFile::new(cmd_opts.file.clone(), cmd_opts.decoder_options);

    if cmd_opts.information {
        println!("{}", probe_input_file(&file)?);
        return Ok(());
    }

    let image = file.decode()?;

    debug!(
        "Decoded {} image of {}x{}",
        image.format_tag(),
        image.width(),
        image.height()
    );

    if let Some(target) = cmd_opts.convert {
        let path = pnm_codec::encode_to_directory(
            &image,
            target,
            output_dir,
            &cmd_opts.output,
            cmd_opts.encoder_options
        )?;
        println!("The file {} has been successfully created.", path.display());

        return Ok(());
    }

    show_image(image, cmd_opts.pixel_size, cmd_opts.rotation)
}

fn verify_file_path(path: &Path) -> Result<(), WorkflowError> {
    if !path.exists() {
        return Err(WorkflowError::GenericString(format!(
            "Path {:?}, does not exist",
            path
        )));
    }

    if !path.is_file() {
        return Err(WorkflowError::GenericString(format!(
            "Path {:?} is not a file",
            path
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use pnm_codec::{DecodeErrors, EncodeErrors};
    use pnm_core::FormatTag;

    use super::*;

    fn input(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, data).unwrap();
        path
    }

    #[test]
    fn converts_into_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = input(dir.path(), "in.ppm", b"P3\n2 1\n255\n0 0 0 255 255 255\n");

        let mut options = CmdOptions::new(file);
        options.convert = Some(FormatTag::P1);
        options.output = String::from("out");

        exec_workflow(&options, dir.path()).unwrap();

        assert_eq!(
            fs::read(dir.path().join("out.pbm")).unwrap(),
            b"P1\n2 1\n1 0\n"
        );

        // a second run must not overwrite the first
        let err = exec_workflow(&options, dir.path()).unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Encode(EncodeErrors::AlreadyExists(_))
        ));
    }

    #[test]
    fn information_does_not_need_a_valid_payload() {
        let dir = tempfile::tempdir().unwrap();
        let file = input(dir.path(), "in.pgm", b"P5\n8 8\n255\n");

        let mut options = CmdOptions::new(file);
        options.information = true;
        options.convert = Some(FormatTag::P2);

        exec_workflow(&options, dir.path()).unwrap();
        // information wins over convert
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn missing_and_unsupported_inputs() {
        let dir = tempfile::tempdir().unwrap();

        let options = CmdOptions::new(dir.path().join("nope.ppm"));
        assert!(matches!(
            exec_workflow(&options, dir.path()),
            Err(WorkflowError::GenericString(_))
        ));

        let options = CmdOptions::new(dir.path().to_path_buf());
        assert!(matches!(
            exec_workflow(&options, dir.path()),
            Err(WorkflowError::GenericString(_))
        ));

        let mut options = CmdOptions::new(input(dir.path(), "in.png", b"P1\n1 1\n0\n"));
        options.convert = Some(FormatTag::P1);
        assert!(matches!(
            exec_workflow(&options, dir.path()),
            Err(WorkflowError::Decode(DecodeErrors::UnsupportedExtension(_)))
        ));
    }

    #[test]
    fn decode_errors_stop_conversion() {
        let dir = tempfile::tempdir().unwrap();
        let mut options = CmdOptions::new(input(dir.path(), "in.pgm", b"P2\n2 2\n255\n1 2 3\n"));
        options.convert = Some(FormatTag::P5);

        assert!(matches!(
            exec_workflow(&options, dir.path()),
            Err(WorkflowError::Decode(DecodeErrors::TruncatedPayload {
                expected: 4,
                found:    3
            }))
        ));
        assert!(!dir.path().join("newImage.pgm").exists());
    }
}
