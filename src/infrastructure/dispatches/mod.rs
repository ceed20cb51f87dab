pub mod local_files;
