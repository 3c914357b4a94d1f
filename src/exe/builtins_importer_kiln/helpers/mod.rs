pub mod shader_compiler;
