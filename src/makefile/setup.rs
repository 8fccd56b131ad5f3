//! Basic setup: directory layout, compiler defaults and the object list

use super::{RenderContext, BANNER};

const BASIC_SETUP: &str = concat!(
    "# Basic Setup\n",
    "\n",
    "# --- set dirs\n",
    "BUILD        := build\n",
    "SRC          := src\n",
    "INC          := include\n",
    "OUTPUT       := bin\n",
    "\n",
    "#  set search path\n",
    "vpath %.cxx  $(SRC)\n",
    "vpath %.hh   $(INC)\n",
    "vpath %.h    $(INC)\n",
    "\n",
    "# --- set compiler and flags (roll c options and include paths together)\n",
    "CXX          ?= g++\n",
    "CXXFLAGS     := -O2 -Wall -fPIC -I$(INC) -g -std=c++17\n",
    "LIBS         := # blank, more will be added below\n",
    "LDFLAGS      := # blank, more will be added below\n",
    "\n",
    "# --- define objects from files in the SRC directory\n",
    "GEN_OBJ_SRC   := $(wildcard $(SRC)/*.cxx)\n",
    "GEN_OBJ       := $(notdir $(GEN_OBJ_SRC:%.cxx=%.o))\n",
    "\n",
    "# this list may be manipulated in other segments further down\n",
    "GEN_OBJ_PATHS := $(GEN_OBJ:%=$(BUILD)/%)\n",
    "\n",
    "# --- all top level (added further down)\n",
    "ALL_TOP_LEVEL := # blank, more will be added below\n",
);

pub fn render(_ctx: &RenderContext<'_>) -> String {
    format!("{BANNER}{BASIC_SETUP}")
}
