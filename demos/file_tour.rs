use filekit::{
    copy_file, delete_file_if_exists, file_age_description, file_extension,
    file_name_without_extension, file_size_in_kb, format_file_size, is_external_storage_writable,
    is_image_file, is_valid_file, kind_from_mime, last_modified_formatted, mime_from_path,
    parent_folder_name, readable_file_name, rename_file, FileSummary, MountProbe, NoResolver,
    ResolveWith,
};
use url::Url;

fn main() -> filekit::Result<()> {
    env_logger::init();

    let scratch = tempfile::tempdir()?;
    let photo = scratch.path().join("holiday.jpg");
    std::fs::write(&photo, vec![0u8; 3 * 1024])?;

    println!("extension:        {}", file_extension("holiday.jpg"));
    println!("base name:        {}", file_name_without_extension("holiday.jpg"));
    println!("is image:         {}", is_image_file("holiday.jpg"));

    let mime = mime_from_path(&photo);
    println!("mime:             {}", mime);
    println!("kind:             {}", kind_from_mime(Some(&mime)));

    println!("formatted size:   {}", format_file_size(3 * 1024));
    println!("size in KB:       {:.1}", file_size_in_kb(&photo));
    println!("last modified:    {}", last_modified_formatted(&photo));
    println!("age:              {}", file_age_description(&photo));
    println!("parent folder:    {}", parent_folder_name(&photo));
    println!("valid file:       {}", is_valid_file(&photo));

    let copy = scratch.path().join("holiday-copy.jpg");
    println!("copied:           {}", copy_file(&photo, &copy));
    if let Some(renamed) = rename_file(&copy, "holiday-backup.jpg") {
        println!("renamed to:       {}", renamed.display());
        println!("deleted:          {}", delete_file_if_exists(&renamed));
    }

    let probe = MountProbe::new(scratch.path());
    println!("storage writable: {}", is_external_storage_writable(&probe));

    if let Ok(locator) = Url::parse("content://downloads/public/42") {
        let resolver = ResolveWith(|_: &Url| Some("Quarterly Report.pdf".to_string()));
        println!("display name:     {}", readable_file_name(&resolver, &locator));
        println!("fallback name:    {}", readable_file_name(&NoResolver, &locator));
    }

    let summary = FileSummary::inspect(&photo)?;
    println!(
        "summary:          {} ({}, {})",
        summary.name,
        summary.mime_type,
        format_file_size(summary.size as i64)
    );

    Ok(())
}
