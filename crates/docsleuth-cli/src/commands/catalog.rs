/// Catalog subcommands — list, inspect, and edit document-type rules.
///
/// Every mutation goes through [`ManagedCatalog`], so a successful edit
/// is already on disk by the time its confirmation prints. Rejected
/// edits (unknown id, blank value, duplicate tag) become errors here;
/// the engine itself reports them as a plain `false`.
use anyhow::{bail, Result};
use docsleuth_core::catalog::{ManagedCatalog, TagArea};

pub fn types(managed: &ManagedCatalog) -> Result<()> {
    for rule in managed.catalog().rules() {
        println!("{:<5} {:<24} {}", rule.id, rule.display_name, rule.mask);
    }
    Ok(())
}

pub fn show(managed: &ManagedCatalog, id: &str) -> Result<()> {
    let Some(rule) = managed.catalog().get(id) else {
        bail!("no rule with id {id:?}");
    };
    println!("id:           {}", rule.id);
    println!("name:         {}", rule.display_name);
    println!("mask:         {}", rule.mask);
    println!("name tags:    {}", rule.tags(TagArea::Name).join(", "));
    println!("content tags: {}", rule.tags(TagArea::Content).join(", "));
    Ok(())
}

pub fn add_tag(managed: &mut ManagedCatalog, id: &str, tag: &str, area: TagArea) -> Result<()> {
    if !managed.add_tag(id, tag, area) {
        bail!("tag not added — the id is unknown, the tag is blank, or it already exists");
    }
    println!("Added {tag:?} to rule {id}");
    Ok(())
}

pub fn remove_tag(managed: &mut ManagedCatalog, id: &str, tag: &str, area: TagArea) -> Result<()> {
    if !managed.remove_tag(id, tag, area) {
        bail!("tag not removed — the id is unknown or the tag is not present (match is case-sensitive)");
    }
    println!("Removed {tag:?} from rule {id}");
    Ok(())
}

pub fn set_mask(managed: &mut ManagedCatalog, id: &str, mask: &str) -> Result<()> {
    if !managed.change_mask(id, mask) {
        bail!("mask not changed — the id is unknown or the mask is blank");
    }
    println!("Mask of rule {id} is now {mask:?}");
    Ok(())
}
