//! Contents and placement of the written `kernel.json`.

use crate::prelude::*;

fn s(v: &[&str]) -> Vec<String> {
    v.iter().map(|x| x.to_string()).collect()
}

#[test]
fn python_kernel_with_defaults() {
    let temp = Project::new();
    let image = temp.image("myimage.sif");
    let image_arg = image.to_string_lossy().into_owned();

    temp.ski().arg(&image).passes();

    let spec = temp.read_kernel_json("myimage");
    assert_eq!(spec["display_name"], "Singularity: myimage");
    assert_eq!(spec["language"], "python");
    assert_eq!(
        temp.argv("myimage"),
        s(&[
            "singularity",
            "exec",
            "--bind",
            "{connection_file}:/connection-spec",
            image_arg.as_str(),
            "python",
            "-m",
            "ipykernel_launcher",
            "-f",
            "/connection-spec",
        ])
    );
}

#[test]
fn r_kernel_with_defaults() {
    let temp = Project::new();
    let image = temp.image("myimage.sif");

    temp.ski().arg(&image).args(["-l", "r"]).passes();

    let spec = temp.read_kernel_json("myimage-r");
    assert_eq!(spec["display_name"], "Singularity: myimage-r");
    assert_eq!(spec["language"], "R");
    let argv = temp.argv("myimage-r");
    assert_eq!(
        argv[argv.len() - 6..].to_vec(),
        s(&["R", "--slave", "-e", "IRkernel::main()", "--args", "/connection-spec"])
    );
}

#[test]
fn custom_interpreters() {
    let temp = Project::new();
    let image = temp.image("tools.sif");

    temp.ski().arg(&image).args(["-p", "/opt/conda/bin/python", "-r", "/usr/lib/R/bin/R"]).passes();
    temp.ski()
        .arg(&image)
        .args(["-l", "r", "-p", "/opt/conda/bin/python", "-r", "/usr/lib/R/bin/R"])
        .passes();

    assert_eq!(temp.argv("tools")[5], "/opt/conda/bin/python");
    assert_eq!(temp.argv("tools-r")[5], "/usr/lib/R/bin/R");
}

#[test]
fn name_and_display_name_overrides() {
    let temp = Project::new();
    let image = temp.image("myimage.sif");

    temp.ski().arg(&image).args(["-n", "genomics", "-d", "Genomics (Singularity)"]).passes();

    assert!(temp.kernel_json("genomics").exists());
    assert!(!temp.kernel_json("myimage").exists());
    assert_eq!(temp.read_kernel_json("genomics")["display_name"], "Genomics (Singularity)");
}

#[test]
fn extra_binds_in_order_before_image() {
    let temp = Project::new();
    let image = temp.image("myimage.sif");
    let image_arg = image.to_string_lossy().into_owned();

    temp.ski()
        .arg(&image)
        .args(["--bind", "/scratch", "-b", "/data:/mnt/data:ro"])
        .passes();

    assert_eq!(
        temp.argv("myimage")[..9].to_vec(),
        s(&[
            "singularity",
            "exec",
            "--bind",
            "{connection_file}:/connection-spec",
            "--bind",
            "/scratch",
            "--bind",
            "/data:/mnt/data:ro",
            image_arg.as_str(),
        ])
    );
}

#[test]
fn container_command_from_flag_and_env() {
    let temp = Project::new();
    let image = temp.image("myimage.sif");

    temp.ski().arg(&image).env("SKI_CONTAINER_COMMAND", "apptainer").passes();
    assert_eq!(temp.argv("myimage")[0], "apptainer");

    temp.ski()
        .arg(&image)
        .env("SKI_CONTAINER_COMMAND", "apptainer")
        .args(["--container-command", "singularity"])
        .passes();
    assert_eq!(temp.argv("myimage")[0], "singularity");
}

#[test]
fn reinstall_is_byte_identical() {
    let temp = Project::new();
    let image = temp.image("myimage.sif");

    temp.ski().arg(&image).args(["-b", "/scratch"]).passes();
    let first = std::fs::read(temp.kernel_json("myimage")).unwrap();
    temp.ski().arg(&image).args(["-b", "/scratch"]).passes();
    let second = std::fs::read(temp.kernel_json("myimage")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn reinstall_overwrites() {
    let temp = Project::new();
    let image = temp.image("myimage.sif");

    temp.ski().arg(&image).args(["-d", "First"]).passes();
    temp.ski().arg(&image).args(["-d", "Second"]).passes();

    assert_eq!(temp.read_kernel_json("myimage")["display_name"], "Second");
}

#[test]
fn json_is_two_space_indented() {
    let temp = Project::new();
    let image = temp.image("myimage.sif");

    temp.ski().arg(&image).passes();

    let text = std::fs::read_to_string(temp.kernel_json("myimage")).unwrap();
    assert!(text.starts_with("{\n  \"argv\": [\n    \"singularity\","), "got:\n{text}");
    assert!(text.ends_with("}\n"));
}
