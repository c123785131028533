//! Precompiled SPIR-V of the cube shaders.

/// Vertex shader: `gl_Position = mvp * in_pos`, the colour at location 1 is passed through.
///
/// ```glsl
/// #version 400
/// layout (std140, binding = 0) uniform buffer { mat4 mvp; } u_buffer_vals;
/// layout (location = 0) in vec4 in_pos;
/// layout (location = 1) in vec4 in_color;
/// layout (location = 0) out vec4 out_color;
/// ```
pub const VERT_SPV: [u32; 289] = [
    0x07230203, 0x00010000, 0x00080006, 0x00000020, 0x00000000, 0x00020011,
    0x00000001, 0x0006000B, 0x00000001, 0x4C534C47, 0x6474732E, 0x3035342E,
    0x00000000, 0x0003000E, 0x00000000, 0x00000001, 0x0009000F, 0x00000000,
    0x00000004, 0x6E69616D, 0x00000000, 0x00000009, 0x0000000B, 0x00000012,
    0x0000001C, 0x00030003, 0x00000002, 0x00000190, 0x00090004, 0x415F4C47,
    0x735F4252, 0x72617065, 0x5F657461, 0x64616873, 0x6F5F7265, 0x63656A62,
    0x00007374, 0x00090004, 0x415F4C47, 0x735F4252, 0x69646168, 0x6C5F676E,
    0x75676E61, 0x5F656761, 0x70303234, 0x006B6361, 0x00040005, 0x00000004,
    0x6E69616D, 0x00000000, 0x00050005, 0x00000009, 0x5F74756F, 0x6F6C6F63,
    0x00000072, 0x00050005, 0x0000000B, 0x635F6E69, 0x726F6C6F, 0x00000000,
    0x00060005, 0x00000010, 0x505F6C67, 0x65567265, 0x78657472, 0x00000000,
    0x00060006, 0x00000010, 0x00000000, 0x505F6C67, 0x7469736F, 0x006E6F69,
    0x00070006, 0x00000010, 0x00000001, 0x505F6C67, 0x746E696F, 0x657A6953,
    0x00000000, 0x00070006, 0x00000010, 0x00000002, 0x435F6C67, 0x4470696C,
    0x61747369, 0x0065636E, 0x00030005, 0x00000012, 0x00000000, 0x00050005,
    0x00000016, 0x66667562, 0x61567265, 0x0000736C, 0x00040006, 0x00000016,
    0x00000000, 0x0070766D, 0x00060005, 0x00000018, 0x75625F75, 0x72656666,
    0x6C61765F, 0x00000073, 0x00040005, 0x0000001C, 0x705F6E69, 0x0000736F,
    0x00040047, 0x00000009, 0x0000001E, 0x00000000, 0x00040047, 0x0000000B,
    0x0000001E, 0x00000001, 0x00050048, 0x00000010, 0x00000000, 0x0000000B,
    0x00000000, 0x00050048, 0x00000010, 0x00000001, 0x0000000B, 0x00000001,
    0x00050048, 0x00000010, 0x00000002, 0x0000000B, 0x00000003, 0x00030047,
    0x00000010, 0x00000002, 0x00040048, 0x00000016, 0x00000000, 0x00000005,
    0x00050048, 0x00000016, 0x00000000, 0x00000023, 0x00000000, 0x00050048,
    0x00000016, 0x00000000, 0x00000007, 0x00000010, 0x00030047, 0x00000016,
    0x00000002, 0x00040047, 0x00000018, 0x00000022, 0x00000000, 0x00040047,
    0x00000018, 0x00000021, 0x00000000, 0x00040047, 0x0000001C, 0x0000001E,
    0x00000000, 0x00020013, 0x00000002, 0x00030021, 0x00000003, 0x00000002,
    0x00030016, 0x00000006, 0x00000020, 0x00040017, 0x00000007, 0x00000006,
    0x00000004, 0x00040020, 0x00000008, 0x00000003, 0x00000007, 0x0004003B,
    0x00000008, 0x00000009, 0x00000003, 0x00040020, 0x0000000A, 0x00000001,
    0x00000007, 0x0004003B, 0x0000000A, 0x0000000B, 0x00000001, 0x00040015,
    0x0000000D, 0x00000020, 0x00000000, 0x0004002B, 0x0000000D, 0x0000000E,
    0x00000001, 0x0004001C, 0x0000000F, 0x00000006, 0x0000000E, 0x0005001E,
    0x00000010, 0x00000007, 0x00000006, 0x0000000F, 0x00040020, 0x00000011,
    0x00000003, 0x00000010, 0x0004003B, 0x00000011, 0x00000012, 0x00000003,
    0x00040015, 0x00000013, 0x00000020, 0x00000001, 0x0004002B, 0x00000013,
    0x00000014, 0x00000000, 0x00040018, 0x00000015, 0x00000007, 0x00000004,
    0x0003001E, 0x00000016, 0x00000015, 0x00040020, 0x00000017, 0x00000002,
    0x00000016, 0x0004003B, 0x00000017, 0x00000018, 0x00000002, 0x00040020,
    0x00000019, 0x00000002, 0x00000015, 0x0004003B, 0x0000000A, 0x0000001C,
    0x00000001, 0x00050036, 0x00000002, 0x00000004, 0x00000000, 0x00000003,
    0x000200F8, 0x00000005, 0x0004003D, 0x00000007, 0x0000000C, 0x0000000B,
    0x0003003E, 0x00000009, 0x0000000C, 0x00050041, 0x00000019, 0x0000001A,
    0x00000018, 0x00000014, 0x0004003D, 0x00000015, 0x0000001B, 0x0000001A,
    0x0004003D, 0x00000007, 0x0000001D, 0x0000001C, 0x00050091, 0x00000007,
    0x0000001E, 0x0000001B, 0x0000001D, 0x00050041, 0x00000008, 0x0000001F,
    0x00000012, 0x00000014, 0x0003003E, 0x0000001F, 0x0000001E, 0x000100FD,
    0x00010038,
];

/// Fragment shader: outputs the interpolated colour.
pub const FRAG_SPV: [u32; 113] = [
    0x07230203, 0x00010000, 0x00080006, 0x0000000D, 0x00000000, 0x00020011,
    0x00000001, 0x0006000B, 0x00000001, 0x4C534C47, 0x6474732E, 0x3035342E,
    0x00000000, 0x0003000E, 0x00000000, 0x00000001, 0x0007000F, 0x00000004,
    0x00000004, 0x6E69616D, 0x00000000, 0x00000009, 0x0000000B, 0x00030010,
    0x00000004, 0x00000007, 0x00030003, 0x00000002, 0x00000190, 0x00090004,
    0x415F4C47, 0x735F4252, 0x72617065, 0x5F657461, 0x64616873, 0x6F5F7265,
    0x63656A62, 0x00007374, 0x00090004, 0x415F4C47, 0x735F4252, 0x69646168,
    0x6C5F676E, 0x75676E61, 0x5F656761, 0x70303234, 0x006B6361, 0x00040005,
    0x00000004, 0x6E69616D, 0x00000000, 0x00050005, 0x00000009, 0x5F74756F,
    0x6F6C6F63, 0x00000072, 0x00050005, 0x0000000B, 0x635F6E69, 0x726F6C6F,
    0x00000000, 0x00040047, 0x00000009, 0x0000001E, 0x00000000, 0x00040047,
    0x0000000B, 0x0000001E, 0x00000000, 0x00020013, 0x00000002, 0x00030021,
    0x00000003, 0x00000002, 0x00030016, 0x00000006, 0x00000020, 0x00040017,
    0x00000007, 0x00000006, 0x00000004, 0x00040020, 0x00000008, 0x00000003,
    0x00000007, 0x0004003B, 0x00000008, 0x00000009, 0x00000003, 0x00040020,
    0x0000000A, 0x00000001, 0x00000007, 0x0004003B, 0x0000000A, 0x0000000B,
    0x00000001, 0x00050036, 0x00000002, 0x00000004, 0x00000000, 0x00000003,
    0x000200F8, 0x00000005, 0x0004003D, 0x00000007, 0x0000000C, 0x0000000B,
    0x0003003E, 0x00000009, 0x0000000C, 0x000100FD, 0x00010038,
];
