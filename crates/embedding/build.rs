fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Compile the proto file for the embedding client
    tonic_build::compile_protos("../../proto/embedding.proto")?;
    Ok(())
}
