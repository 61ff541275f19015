pub mod completion;
#[cfg(test)]
pub mod mock_render_adapter;
pub mod render_adapter;
