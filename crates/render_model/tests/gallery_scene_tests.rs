//! End-to-end tests for the gallery pipeline
//! JSON document -> gallery model -> layout engine -> render model
//!
//! These tests feed store-shaped gallery documents through the whole
//! pipeline and check the resulting scene records the way a renderer
//! would consume them.

use gallery_model::Gallery;
use layout_engine::{LayoutEngine, LayoutError};
use render_model::{RenderConverter, TrimKind};
use std::collections::HashSet;

fn scene_for(json: &str) -> render_model::RenderModel {
    let gallery = Gallery::from_json(json).expect("valid gallery document");
    let layout = LayoutEngine::default()
        .layout(&gallery)
        .expect("layout succeeds");
    RenderConverter::default().convert(&layout, &gallery.name)
}

#[test]
fn test_store_document_to_full_scene() {
    let scene = scene_for(
        r#"{
            "_id": "g42",
            "name": "Spring Show",
            "size": "medium",
            "frameStyle": "white",
            "artworks": [
                {"artworkId": "a1", "title": "Harbor", "artist": "L. Finch", "url": "uploads/harbor.png", "dimensions": "120x80"},
                {"_id": "a2", "title": "Dune", "mainImageUrl": "uploads/dune.png", "width": 90, "height": 120},
                {"id": "a3", "imageUrl": "uploads/mist.png"},
                {"title": "Quiet Field", "artistName": "P. Roe", "mainImage": "uploads/field.png", "dimensions": "100x100"}
            ]
        }"#,
    );

    assert_eq!(scene.name, "Spring Show");
    assert_eq!(scene.artworks.len(), 4);
    assert_eq!(scene.dropped, 0);

    // One artwork per wall, in planning order: back, left, right, front
    let yaws: Vec<f32> = scene.artworks.iter().map(|a| a.rotation.y).collect();
    assert_eq!(yaws, vec![0.0, 90.0, -90.0, 180.0]);

    // Field-name variance normalized: every image URL came through
    let urls: Vec<&str> = scene.artworks.iter().map(|a| a.image_url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "uploads/harbor.png",
            "uploads/dune.png",
            "uploads/mist.png",
            "uploads/field.png"
        ]
    );

    // The third artwork had no title or artist
    assert_eq!(scene.artworks[2].label.text, "Untitled\nUnknown Artist");
}

#[test]
fn test_no_two_artworks_share_a_position() {
    let mut artworks = String::new();
    for i in 0..12 {
        if i > 0 {
            artworks.push(',');
        }
        artworks.push_str(&format!(
            r#"{{"title": "Piece {i}", "dimensions": "100x100"}}"#
        ));
    }
    let scene = scene_for(&format!(
        r#"{{"name": "Full House", "size": "large", "artworks": [{artworks}]}}"#
    ));

    assert_eq!(scene.artworks.len(), 12);
    let positions: HashSet<String> = scene
        .artworks
        .iter()
        .map(|a| {
            format!(
                "{:.2},{:.2},{:.2}",
                a.position.x, a.position.y, a.position.z
            )
        })
        .collect();
    assert_eq!(positions.len(), 12);
}

#[test]
fn test_oversized_gallery_truncates_to_capacity() {
    let mut artworks = String::new();
    for i in 0..16 {
        if i > 0 {
            artworks.push(',');
        }
        artworks.push_str(&format!(r#"{{"title": "Piece {i}"}}"#));
    }
    let scene = scene_for(&format!(
        r#"{{"name": "Overflow", "size": "large", "artworks": [{artworks}]}}"#
    ));

    assert_eq!(scene.artworks.len(), 12);
    assert_eq!(scene.dropped, 4);
}

#[test]
fn test_empty_gallery_surfaces_unavailable() {
    let gallery = Gallery::from_json(r#"{"name": "Nothing Here", "artworks": []}"#).unwrap();
    let err = LayoutEngine::default().layout(&gallery).unwrap_err();
    assert!(matches!(err, LayoutError::Unavailable { .. }));
    assert!(err.to_string().contains("Nothing Here"));
}

#[test]
fn test_malformed_artwork_data_still_renders() {
    let scene = scene_for(
        r#"{
            "name": "Rough Data",
            "size": "small",
            "artworks": [
                {"title": "Bad Dims", "dimensions": "abcxdef"},
                {"title": "Zeroes", "width": 0, "height": 0}
            ]
        }"#,
    );

    assert_eq!(scene.artworks.len(), 2);
    for artwork in &scene.artworks {
        // Both degrade to the 100x100 cm default, one square meter
        assert!((artwork.width - 1.0).abs() < 1e-6 || (artwork.width - 0.9).abs() < 1e-6);
        assert!(artwork.height > 0.0);
    }
}

#[test]
fn test_room_shell_complete_for_renderer() {
    let scene = scene_for(
        r#"{"name": "Shell", "size": "small", "artworks": [{"title": "Solo"}]}"#,
    );

    assert_eq!(scene.room.walls.len(), 4);
    assert_eq!(scene.room.trim.len(), 8);
    assert!(scene.room.camera_height > 0.0);
    assert!(scene.room.ceiling.position.y > scene.room.floor.position.y);

    let baseboards = scene
        .room
        .trim
        .iter()
        .filter(|t| t.kind == TrimKind::Baseboard)
        .count();
    assert_eq!(baseboards, 4);
}
