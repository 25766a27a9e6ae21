//! Status lines printed on success.

use crate::prelude::*;

#[test]
fn text_output_names_kernel_and_file() {
    let temp = Project::new();
    let image = temp.image("myimage.sif");

    temp.ski().arg(&image).passes().stdout_eq(&format!(
        "Singularity Python kernel 'Singularity: myimage' installed successfully!\n\
         Kernel specification file: {}\n",
        temp.kernel_json("myimage").display()
    ));
}

#[test]
fn r_text_output_uses_r_label() {
    let temp = Project::new();
    let image = temp.image("myimage.sif");

    temp.ski()
        .arg(&image)
        .args(["-l", "r"])
        .passes()
        .stdout_has("Singularity R kernel 'Singularity: myimage-r' installed successfully!");
}

#[test]
fn json_output_describes_installation() {
    let temp = Project::new();
    let image = temp.image("myimage.sif");

    let run = temp
        .ski()
        .arg(&image)
        .args(["-o", "json"])
        .passes()
        .stdout_lacks("installed successfully");

    let value: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(value["kernel_name"], "myimage");
    assert_eq!(value["display_name"], "Singularity: myimage");
    assert_eq!(value["language"], "python");
    assert_eq!(value["path"], temp.kernel_json("myimage").to_string_lossy().into_owned());
    assert_eq!(value["spec"], temp.read_kernel_json("myimage"));
}

#[test]
fn debug_logging_goes_to_stderr() {
    let temp = Project::new();
    let image = temp.image("myimage.sif");

    let run = temp
        .ski()
        .arg(&image)
        .env("SKI_LOG", "debug")
        .passes()
        .stderr_has("built kernel argv");

    assert!(!run.stdout().contains("built kernel argv"));
}
